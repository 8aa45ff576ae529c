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

pub struct GetWinnerInput {
    pub house_id:   entities::HouseId,
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Only a terminated auction has a winner.
    pub async fn get_winner(&self, input: GetWinnerInput) -> Result<entities::Bidder, RestError> {
        let auction = self
            .get_auction(GetAuctionInput {
                house_id:   input.house_id,
                auction_id: input.auction_id,
            })
            .await?;
        if auction.status != entities::AuctionStatus::Terminated {
            return Err(RestError::AuctionNotFinished);
        }
        auction.get_winner().cloned().ok_or(RestError::NoBidsFound)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::house::service::{
            bid_on_auction::BidOnAuctionInput,
            create_auction::CreateAuctionInput,
            create_house::CreateHouseInput,
            tests::{
                auction_create,
                bidder_create,
            },
            update_auction_status::UpdateAuctionStatusInput,
        },
        entities::AuctionStatus,
    };

    async fn terminate(service: &Service, house_id: entities::HouseId, auction: &entities::Auction) {
        service
            .update_auction_status(UpdateAuctionStatusInput {
                house_id,
                auction_id: auction.id,
                new_status: AuctionStatus::Terminated,
            })
            .await
            .unwrap();
    }

    fn bid(
        house_id: entities::HouseId,
        auction: &entities::Auction,
        name: &str,
        price: entities::Price,
    ) -> BidOnAuctionInput {
        BidOnAuctionInput {
            house_id,
            auction_id: auction.id,
            bidder_create: bidder_create(name, price),
        }
    }

    #[tokio::test]
    async fn test_full_auction_lifecycle() {
        let service = Service::new_in_memory();
        let house = service
            .create_house(CreateHouseInput {
                house_create: entities::HouseCreate {
                    name:         "Spideo".to_string(),
                    creator_name: "Elliott".to_string(),
                },
            })
            .await
            .unwrap();
        let auction = service
            .create_auction(CreateAuctionInput {
                house_id:       house.id,
                auction_create: auction_create(100.0, None),
            })
            .await
            .unwrap();
        assert_eq!(auction.status, AuctionStatus::NotStarted);
        assert_eq!(auction.creator_name, "Elliott");

        assert_eq!(
            service
                .bid_on_auction(bid(house.id, &auction, "Anon-1", 150.0))
                .await,
            Err(RestError::AuctionNotStarted)
        );

        service
            .update_auction_status(UpdateAuctionStatusInput {
                house_id:   house.id,
                auction_id: auction.id,
                new_status: AuctionStatus::Running,
            })
            .await
            .unwrap();
        let winner = service
            .bid_on_auction(bid(house.id, &auction, "Anon-1", 150.0))
            .await
            .unwrap();
        assert_eq!(
            service
                .bid_on_auction(bid(house.id, &auction, "Anon-2", 120.0))
                .await,
            Err(RestError::BidPriceTooLow)
        );
        assert_eq!(
            service
                .get_winner(GetWinnerInput {
                    house_id:   house.id,
                    auction_id: auction.id,
                })
                .await,
            Err(RestError::AuctionNotFinished)
        );

        terminate(&service, house.id, &auction).await;
        assert_eq!(
            service
                .bid_on_auction(bid(house.id, &auction, "Anon-3", 200.0))
                .await,
            Err(RestError::AuctionNotStarted)
        );

        let found = service
            .get_winner(GetWinnerInput {
                house_id:   house.id,
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(found, winner);
        assert_eq!(found.name, "Anon-1");
        assert_eq!(found.price, 150.0);
    }

    #[tokio::test]
    async fn test_auction_created_running() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        let auction = service
            .create_auction(CreateAuctionInput {
                house_id:       house.id,
                auction_create: auction_create(100.0, Some(AuctionStatus::Running)),
            })
            .await
            .unwrap();
        assert_eq!(auction.current_price, 100.0);

        service
            .bid_on_auction(bid(house.id, &auction, "Anon-1", 150.0))
            .await
            .unwrap();
        assert_eq!(
            service
                .bid_on_auction(bid(house.id, &auction, "Anon-2", 120.0))
                .await,
            Err(RestError::BidPriceTooLow)
        );
        terminate(&service, house.id, &auction).await;

        let winner = service
            .get_winner(GetWinnerInput {
                house_id:   house.id,
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!((winner.name.as_str(), winner.price), ("Anon-1", 150.0));
    }

    #[tokio::test]
    async fn test_winner_is_the_highest_bid() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        let auction = service
            .create_auction(CreateAuctionInput {
                house_id:       house.id,
                auction_create: auction_create(1.0, Some(AuctionStatus::Running)),
            })
            .await
            .unwrap();

        service
            .bid_on_auction(bid(house.id, &auction, "id1", 10.0))
            .await
            .unwrap();
        let expected = service
            .bid_on_auction(bid(house.id, &auction, "id2", 50.0))
            .await
            .unwrap();
        assert_eq!(
            service
                .bid_on_auction(bid(house.id, &auction, "id3", 30.0))
                .await,
            Err(RestError::BidPriceTooLow)
        );
        terminate(&service, house.id, &auction).await;

        let winner = service
            .get_winner(GetWinnerInput {
                house_id:   house.id,
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(winner, expected);
    }

    #[tokio::test]
    async fn test_terminated_auction_without_bids() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        let auction = service
            .create_test_auction(house.id, AuctionStatus::Running)
            .await;
        terminate(&service, house.id, &auction).await;

        assert_eq!(
            service
                .get_winner(GetWinnerInput {
                    house_id:   house.id,
                    auction_id: auction.id,
                })
                .await,
            Err(RestError::NoBidsFound)
        );
    }

    #[tokio::test]
    async fn test_deleted_auction_has_no_winner() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        let auction = service
            .create_test_auction(house.id, AuctionStatus::Deleted)
            .await;

        assert_eq!(
            service
                .get_winner(GetWinnerInput {
                    house_id:   house.id,
                    auction_id: auction.id,
                })
                .await,
            Err(RestError::AuctionNotFinished)
        );
    }
}
