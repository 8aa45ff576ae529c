use {
    ::serde::{
        Deserialize,
        Serialize,
    },
    strum::AsRefStr,
    utoipa::{
        ToResponse,
        ToSchema,
    },
};

pub mod auction;
pub mod house;
pub mod serde;

#[derive(ToResponse, ToSchema, Serialize, Deserialize, Debug)]
#[response(description = "An error occurred processing the request")]
pub struct ErrorBodyResponse {
    pub error: String,
}

#[derive(AsRefStr, Clone, Copy, Debug)]
#[strum(prefix = "/")]
pub enum Route {
    #[strum(serialize = "v1")]
    V1,
    #[strum(serialize = "houses")]
    Houses,
    #[strum(serialize = "creator/:creator_name")]
    HousesByCreator,
    #[strum(serialize = ":house_id")]
    House,
    #[strum(serialize = ":house_id/auctions")]
    Auctions,
    #[strum(serialize = ":house_id/auctions/:auction_id")]
    Auction,
    #[strum(serialize = ":house_id/auctions/:auction_id/status/:status")]
    AuctionStatus,
    #[strum(serialize = ":house_id/auctions/:auction_id/bids")]
    Bids,
    #[strum(serialize = ":house_id/auctions/:auction_id/winner")]
    Winner,
    #[strum(serialize = "")]
    Root,
    #[strum(serialize = "live")]
    Liveness,
    #[strum(serialize = "docs")]
    Docs,
    #[strum(serialize = "docs/openapi.json")]
    OpenApi,
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Root.as_ref(), "/");
        assert_eq!(Route::V1.as_ref(), "/v1");
        assert_eq!(Route::OpenApi.as_ref(), "/docs/openapi.json");
        assert_eq!(
            Route::AuctionStatus.as_ref(),
            "/:house_id/auctions/:auction_id/status/:status"
        );
    }
}
