use {
    super::{
        get_auction::GetAuctionInput,
        Service,
    },
    crate::{
        api::RestError,
        house::entities,
    },
    std::collections::HashMap,
};

pub struct GetAllBiddingInput {
    pub house_id:   entities::HouseId,
    pub auction_id: entities::AuctionId,
}

impl Service {
    pub async fn get_all_bidding(
        &self,
        input: GetAllBiddingInput,
    ) -> Result<HashMap<entities::BidderId, entities::BiddingEntry>, RestError> {
        let auction = self
            .get_auction(GetAuctionInput {
                house_id:   input.house_id,
                auction_id: input.auction_id,
            })
            .await?;
        Ok(auction.get_bidding())
    }
}
