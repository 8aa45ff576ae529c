use {
    super::{
        Auction,
        AuctionId,
        AuctionStatus,
    },
    std::collections::HashMap,
    uuid::Uuid,
};

pub type HouseId = Uuid;

#[derive(Debug, Clone)]
pub struct HouseCreate {
    pub name:         String,
    pub creator_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuctionHouse {
    pub id:           HouseId,
    pub name:         String,
    pub creator_name: String,

    pub auctions: HashMap<AuctionId, Auction>,
}

impl AuctionHouse {
    pub fn new(house_create: HouseCreate) -> Self {
        Self {
            id:           Uuid::new_v4(),
            name:         house_create.name,
            creator_name: house_create.creator_name,
            auctions:     HashMap::new(),
        }
    }

    pub fn add_auction(&mut self, auction: Auction) {
        self.auctions.insert(auction.id, auction);
    }

    pub fn auctions_with_status(&self, status: AuctionStatus) -> Vec<Auction> {
        self.auctions
            .values()
            .filter(|auction| auction.status == status)
            .cloned()
            .collect()
    }
}
