use {
    super::{
        get_auction::GetHouseInput,
        Service,
    },
    crate::{
        api::RestError,
        house::entities,
    },
};

pub struct CreateAuctionInput {
    pub house_id:       entities::HouseId,
    pub auction_create: entities::AuctionCreate,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(house_id = %input.house_id, auction_id))]
    pub async fn create_auction(
        &self,
        input: CreateAuctionInput,
    ) -> Result<entities::Auction, RestError> {
        let house = self
            .get_house(GetHouseInput {
                house_id: input.house_id,
            })
            .await?;
        let auction = entities::Auction::new(input.auction_create, house.creator_name);
        tracing::Span::current().record("auction_id", auction.id.to_string());

        self.repo
            .save_auction(house.id, auction)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to add auction");
                RestError::GeneralFailure
            })?
            // The house was deleted in the meantime.
            .ok_or(RestError::HouseNotFound)
    }
}
