use {
    super::{
        get_auction::GetAuctionInput,
        Service,
    },
    crate::{
        api::RestError,
        house::entities,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateAuctionStatusInput {
    pub house_id:   entities::HouseId,
    pub auction_id: entities::AuctionId,
    pub new_status: entities::AuctionStatus,
}

impl Service {
    async fn update_auction_status_for_lock(
        &self,
        input: UpdateAuctionStatusInput,
        lock: entities::AuctionLock,
    ) -> Result<entities::Auction, RestError> {
        let _lock = lock.lock().await;
        let mut auction = self
            .get_auction(GetAuctionInput {
                house_id:   input.house_id,
                auction_id: input.auction_id,
            })
            .await?;
        if auction.status.is_final(self.config.deleted_is_final) {
            return Err(RestError::AuctionAlreadyFinished);
        }

        tracing::info!(from = %auction.status, to = %input.new_status, "Updating auction status");
        auction.status = input.new_status;
        self.repo
            .save_auction(input.house_id, auction)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to update auction status");
                RestError::GeneralFailure
            })?
            .ok_or(RestError::HouseNotFound)
    }

    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(house_id = %input.house_id, auction_id = %input.auction_id))]
    pub async fn update_auction_status(
        &self,
        input: UpdateAuctionStatusInput,
    ) -> Result<entities::Auction, RestError> {
        let key = (input.house_id, input.auction_id);
        let lock = self.repo.get_or_create_in_memory_auction_lock(key).await;
        let result = self.update_auction_status_for_lock(input, lock).await;
        self.repo.remove_in_memory_auction_lock(&key).await;
        result
    }
}
