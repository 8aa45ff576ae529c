use {
    crate::house::HouseId,
    serde::{
        Deserialize,
        Serialize,
    },
    std::collections::HashMap,
    time::OffsetDateTime,
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type AuctionId = Uuid;
pub type BidderId = Uuid;
pub type Price = f64;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    /// The auction is created but does not accept bids yet.
    NotStarted,
    /// The auction accepts bids.
    Running,
    /// The auction is over and its winner can be fetched.
    Terminated,
    /// The auction was marked as deleted.
    Deleted,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateAuction {
    /// The name of the auction.
    #[schema(example = "Test")]
    pub name:          String,
    /// A free text description of the auction.
    #[schema(example = "A signed first edition")]
    #[serde(default)]
    pub description:   String,
    /// When the auction starts. Defaults to the creation time.
    #[schema(example = "2024-05-23T21:26:57.329954Z", value_type = Option<String>)]
    #[serde(default, with = "crate::serde::nullable_datetime")]
    pub starting_time: Option<OffsetDateTime>,
    /// When the auction is expected to end.
    #[schema(example = "2024-05-24T21:26:57.329954Z", value_type = Option<String>)]
    #[serde(default, with = "crate::serde::nullable_datetime")]
    pub end_time:      Option<OffsetDateTime>,
    /// The maximum number of bidders announced for this auction.
    #[schema(example = 10)]
    #[serde(default)]
    pub max_bidders:   u32,
    /// The initial status of the auction. Defaults to NOT_STARTED.
    #[serde(default)]
    pub status:        Option<AuctionStatus>,
    /// The price set by the creator. Bids must be strictly higher.
    #[schema(example = 100.0)]
    pub initial_price: Price,
    /// The current price. Zero means "start at the initial price".
    #[schema(example = 0.0)]
    #[serde(default)]
    pub current_price: Price,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct Auction {
    /// The id of the auction.
    #[schema(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:            AuctionId,
    /// The name of the auction.
    #[schema(example = "Test")]
    pub name:          String,
    /// A free text description of the auction.
    pub description:   String,
    /// The name of the user who created the house hosting this auction.
    #[schema(example = "Elliott")]
    pub creator_name:  String,
    #[schema(example = "2024-05-23T21:26:57.329954Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub starting_time: OffsetDateTime,
    #[schema(example = "2024-05-24T21:26:57.329954Z", value_type = Option<String>)]
    #[serde(with = "crate::serde::nullable_datetime")]
    pub end_time:      Option<OffsetDateTime>,
    #[schema(example = 10)]
    pub max_bidders:   u32,
    pub status:        AuctionStatus,
    #[schema(example = 100.0)]
    pub initial_price: Price,
    /// The highest accepted bid so far, or the initial price if there is none.
    #[schema(example = 150.0)]
    pub current_price: Price,
    /// The accepted bids of the auction.
    pub bidders:       Vec<Bidder>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateBid {
    /// The display name of the bidder. It can be a pseudonym.
    #[schema(example = "Anon-1")]
    pub name:         String,
    /// When the bid was placed. Defaults to the submission time.
    #[schema(example = "2024-05-23T21:26:57.329954Z", value_type = Option<String>)]
    #[serde(default, with = "crate::serde::nullable_datetime")]
    pub bidding_time: Option<OffsetDateTime>,
    /// The offered price.
    #[schema(example = 150.0)]
    pub price:        Price,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct Bidder {
    /// The id assigned to the bid when it was accepted.
    #[schema(example = "cafecafe-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:           BidderId,
    #[schema(example = "Anon-1")]
    pub name:         String,
    #[schema(example = "2024-05-23T21:26:57.329954Z", value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub bidding_time: OffsetDateTime,
    #[schema(example = 150.0)]
    pub price:        Price,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BiddingEntry {
    #[schema(example = "Anon-1")]
    pub name:  String,
    #[schema(example = 150.0)]
    pub price: Price,
}

/// All bids of an auction keyed by bidder id.
#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct Bidding {
    #[schema(value_type = HashMap<String, BiddingEntry>)]
    pub bids: HashMap<BidderId, BiddingEntry>,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
#[into_params(parameter_in = Path)]
pub struct AuctionPathParams {
    #[param(example = "0b03ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub house_id:   HouseId,
    #[param(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
#[into_params(parameter_in = Path)]
pub struct AuctionStatusPathParams {
    #[param(example = "0b03ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub house_id:   HouseId,
    #[param(example = "beedbeed-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub auction_id: AuctionId,
    #[param(example = "RUNNING", value_type = AuctionStatus)]
    pub status:     AuctionStatus,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug, Default)]
pub struct GetAuctionsQueryParams {
    /// Only return auctions in this status.
    #[param(example = "RUNNING", value_type = Option<AuctionStatus>)]
    #[serde(default)]
    pub status: Option<AuctionStatus>,
}
