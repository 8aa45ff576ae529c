use {
    super::{
        get_auction::GetAuctionInput,
        Service,
        BIDS_TOTAL_METRIC,
    },
    crate::{
        api::RestError,
        house::entities,
    },
    axum_prometheus::metrics,
};

#[derive(Debug, Clone)]
pub struct BidOnAuctionInput {
    pub house_id:      entities::HouseId,
    pub auction_id:    entities::AuctionId,
    pub bidder_create: entities::BidderCreate,
}

impl Service {
    async fn bid_on_auction_for_lock(
        &self,
        input: BidOnAuctionInput,
        lock: entities::AuctionLock,
    ) -> Result<entities::Bidder, RestError> {
        let _lock = lock.lock().await;
        let mut auction = self
            .get_auction(GetAuctionInput {
                house_id:   input.house_id,
                auction_id: input.auction_id,
            })
            .await?;
        if auction.status != entities::AuctionStatus::Running {
            return Err(RestError::AuctionNotStarted);
        }
        if !auction.accepts_price(input.bidder_create.price) {
            return Err(RestError::BidPriceTooLow);
        }

        let bidder = entities::Bidder::new(input.bidder_create);
        auction.add_bid(bidder.clone());
        self.repo
            .save_auction(input.house_id, auction)
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, bidder = ?bidder, "Failed to save bid");
                RestError::GeneralFailure
            })?
            .ok_or(RestError::HouseNotFound)?;
        Ok(bidder)
    }

    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(house_id = %input.house_id, auction_id = %input.auction_id, bidder_id))]
    pub async fn bid_on_auction(
        &self,
        input: BidOnAuctionInput,
    ) -> Result<entities::Bidder, RestError> {
        let key = (input.house_id, input.auction_id);
        let lock = self.repo.get_or_create_in_memory_auction_lock(key).await;
        let result = self.bid_on_auction_for_lock(input, lock).await;
        self.repo.remove_in_memory_auction_lock(&key).await;

        match &result {
            Ok(bidder) => {
                tracing::Span::current().record("bidder_id", bidder.id.to_string());
                metrics::counter!(BIDS_TOTAL_METRIC, "result" => "accepted").increment(1);
            }
            Err(_) => {
                metrics::counter!(BIDS_TOTAL_METRIC, "result" => "rejected").increment(1);
            }
        }
        result
    }
}
