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
pub struct DeleteAuctionInput {
    pub house_id:   entities::HouseId,
    pub auction_id: entities::AuctionId,
}

impl Service {
    async fn delete_auction_for_lock(
        &self,
        input: DeleteAuctionInput,
        lock: entities::AuctionLock,
    ) -> Result<bool, RestError> {
        let _lock = lock.lock().await;
        let auction = self
            .get_auction(GetAuctionInput {
                house_id:   input.house_id,
                auction_id: input.auction_id,
            })
            .await?;
        let deleted = self
            .repo
            .remove_auction((input.house_id, auction.id))
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to delete auction");
                RestError::GeneralFailure
            })?;
        if !deleted {
            return Err(RestError::AuctionNotFound);
        }
        Ok(deleted)
    }

    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(house_id = %input.house_id, auction_id = %input.auction_id))]
    pub async fn delete_auction(&self, input: DeleteAuctionInput) -> Result<bool, RestError> {
        let key = (input.house_id, input.auction_id);
        let lock = self.repo.get_or_create_in_memory_auction_lock(key).await;
        let result = self.delete_auction_for_lock(input, lock).await;
        self.repo.remove_in_memory_auction_lock(&key).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::house::service::get_auctions::GetAuctionsInput,
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_delete_auction() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        let auction = service
            .create_test_auction(house.id, entities::AuctionStatus::NotStarted)
            .await;
        let other = service
            .create_test_auction(house.id, entities::AuctionStatus::Running)
            .await;

        let input = DeleteAuctionInput {
            house_id:   house.id,
            auction_id: auction.id,
        };
        assert_eq!(service.delete_auction(input.clone()).await, Ok(true));
        assert_eq!(
            service.delete_auction(input).await,
            Err(RestError::AuctionNotFound)
        );

        let auctions = service
            .get_auctions(GetAuctionsInput {
                house_id: house.id,
                status:   None,
            })
            .await
            .unwrap();
        assert_eq!(auctions, vec![other]);
        assert!(service
            .repo
            .in_memory_store
            .auction_lock
            .lock()
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_auction_of_missing_house() {
        let service = Service::new_in_memory();
        assert_eq!(
            service
                .delete_auction(DeleteAuctionInput {
                    house_id:   Uuid::new_v4(),
                    auction_id: Uuid::new_v4(),
                })
                .await,
            Err(RestError::HouseNotFound)
        );
    }
}
