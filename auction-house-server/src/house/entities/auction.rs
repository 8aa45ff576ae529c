use {
    super::{
        Bidder,
        BidderId,
        HouseId,
    },
    std::{
        cmp::Ordering,
        collections::HashMap,
        sync::Arc,
    },
    time::OffsetDateTime,
    tokio::sync::Mutex,
    uuid::Uuid,
};

pub type AuctionId = Uuid;
pub type AuctionKey = (HouseId, AuctionId);
pub type AuctionLock = Arc<Mutex<()>>;
pub type Price = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    NotStarted,
    Running,
    Terminated,
    Deleted,
}

impl AuctionStatus {
    /// Whether an auction in this status can still change status.
    pub fn is_final(&self, deleted_is_final: bool) -> bool {
        match self {
            AuctionStatus::Terminated => true,
            AuctionStatus::Deleted => deleted_is_final,
            AuctionStatus::NotStarted | AuctionStatus::Running => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuctionCreate {
    pub name:          String,
    pub description:   String,
    pub starting_time: Option<OffsetDateTime>,
    pub end_time:      Option<OffsetDateTime>,
    pub max_bidders:   u32,
    pub status:        Option<AuctionStatus>,
    pub initial_price: Price,
    pub current_price: Price,
}

#[derive(Debug, Clone)]
pub struct BiddingEntry {
    pub name:  String,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    pub id:            AuctionId,
    pub name:          String,
    pub description:   String,
    pub creator_name:  String,
    pub starting_time: OffsetDateTime,
    pub end_time:      Option<OffsetDateTime>,
    pub max_bidders:   u32,
    pub status:        AuctionStatus,
    pub initial_price: Price,
    pub current_price: Price,

    pub bidders: HashMap<BidderId, Bidder>,
    pub bidding: HashMap<BidderId, Price>,
}

impl Auction {
    pub fn new(auction_create: AuctionCreate, creator_name: String) -> Self {
        let current_price = if auction_create.current_price == 0.0 {
            auction_create.initial_price
        } else {
            auction_create.current_price
        };
        Self {
            id: Uuid::new_v4(),
            name: auction_create.name,
            description: auction_create.description,
            creator_name,
            starting_time: auction_create
                .starting_time
                .unwrap_or_else(OffsetDateTime::now_utc),
            end_time: auction_create.end_time,
            max_bidders: auction_create.max_bidders,
            status: auction_create.status.unwrap_or(AuctionStatus::NotStarted),
            initial_price: auction_create.initial_price,
            current_price,
            bidders: HashMap::new(),
            bidding: HashMap::new(),
        }
    }

    /// A bid must be strictly higher than both the current and the initial price.
    pub fn accepts_price(&self, price: Price) -> bool {
        price > self.current_price && price > self.initial_price
    }

    pub fn add_bid(&mut self, bidder: Bidder) {
        self.current_price = bidder.price;
        self.bidding.insert(bidder.id, bidder.price);
        self.bidders.insert(bidder.id, bidder);
    }

    pub fn get_bidding(&self) -> HashMap<BidderId, BiddingEntry> {
        self.bidding
            .iter()
            .filter_map(|(id, price)| {
                self.bidders.get(id).map(|bidder| {
                    (
                        *id,
                        BiddingEntry {
                            name:  bidder.name.clone(),
                            price: *price,
                        },
                    )
                })
            })
            .collect()
    }

    /// The highest bid wins. Equal prices go to the earliest bid, then to the smallest id.
    pub fn get_winner(&self) -> Option<&Bidder> {
        self.bidding
            .iter()
            .filter_map(|(id, price)| self.bidders.get(id).map(|bidder| (*price, bidder)))
            .max_by(|(price_a, a), (price_b, b)| {
                price_a
                    .partial_cmp(price_b)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.bidding_time.cmp(&a.bidding_time))
                    .then_with(|| b.id.cmp(&a.id))
            })
            .map(|(_, bidder)| bidder)
    }
}
