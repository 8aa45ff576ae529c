use {
    super::Price,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type BidderId = Uuid;

#[derive(Debug, Clone)]
pub struct BidderCreate {
    pub name:         String,
    pub bidding_time: Option<OffsetDateTime>,
    pub price:        Price,
}

/// A single accepted bid. The id only exists once the bid has been accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Bidder {
    pub id:           BidderId,
    pub name:         String,
    pub bidding_time: OffsetDateTime,
    pub price:        Price,
}

impl Bidder {
    pub fn new(bidder_create: BidderCreate) -> Self {
        Self {
            id:           Uuid::new_v4(),
            name:         bidder_create.name,
            bidding_time: bidder_create
                .bidding_time
                .unwrap_or_else(OffsetDateTime::now_utc),
            price:        bidder_create.price,
        }
    }
}
