use {
    super::Service,
    crate::{
        api::RestError,
        house::entities,
    },
};

pub struct GetHouseInput {
    pub house_id: entities::HouseId,
}

pub struct GetAuctionInput {
    pub house_id:   entities::HouseId,
    pub auction_id: entities::AuctionId,
}

impl Service {
    pub async fn get_house(&self, input: GetHouseInput) -> Result<entities::AuctionHouse, RestError> {
        self.repo
            .get_house_by_id(input.house_id)
            .await
            .ok_or(RestError::HouseNotFound)
    }

    /// Resolves an auction through its house, telling a missing house apart from a missing auction.
    pub async fn get_auction(&self, input: GetAuctionInput) -> Result<entities::Auction, RestError> {
        match self.repo.get_auction((input.house_id, input.auction_id)).await {
            Some(auction) => Ok(auction),
            None => {
                self.get_house(GetHouseInput {
                    house_id: input.house_id,
                })
                .await?;
                Err(RestError::AuctionNotFound)
            }
        }
    }
}
