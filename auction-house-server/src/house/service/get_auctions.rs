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

pub struct GetAuctionsInput {
    pub house_id: entities::HouseId,
    /// Only return the auctions in exactly this status.
    pub status:   Option<entities::AuctionStatus>,
}

impl Service {
    pub async fn get_auctions(
        &self,
        input: GetAuctionsInput,
    ) -> Result<Vec<entities::Auction>, RestError> {
        let house = self
            .get_house(GetHouseInput {
                house_id: input.house_id,
            })
            .await?;
        Ok(match input.status {
            Some(status) => house.auctions_with_status(status),
            None => house.auctions.into_values().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        entities::AuctionStatus,
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_get_auctions() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        assert!(service
            .get_auctions(GetAuctionsInput {
                house_id: house.id,
                status:   None,
            })
            .await
            .unwrap()
            .is_empty());

        service
            .create_test_auction(house.id, AuctionStatus::NotStarted)
            .await;
        service
            .create_test_auction(house.id, AuctionStatus::Running)
            .await;

        let auctions = service
            .get_auctions(GetAuctionsInput {
                house_id: house.id,
                status:   None,
            })
            .await
            .unwrap();
        assert_eq!(auctions.len(), 2);
    }

    #[tokio::test]
    async fn test_get_auctions_by_status() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        let running = service
            .create_test_auction(house.id, AuctionStatus::Running)
            .await;
        service
            .create_test_auction(house.id, AuctionStatus::NotStarted)
            .await;

        let auctions = service
            .get_auctions(GetAuctionsInput {
                house_id: house.id,
                status:   Some(AuctionStatus::Running),
            })
            .await
            .unwrap();
        assert_eq!(auctions, vec![running]);

        assert!(service
            .get_auctions(GetAuctionsInput {
                house_id: house.id,
                status:   Some(AuctionStatus::Terminated),
            })
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_auctions_of_missing_house() {
        let service = Service::new_in_memory();
        for status in [None, Some(AuctionStatus::Running)] {
            assert_eq!(
                service
                    .get_auctions(GetAuctionsInput {
                        house_id: Uuid::new_v4(),
                        status,
                    })
                    .await,
                Err(RestError::HouseNotFound)
            );
        }
    }
}
