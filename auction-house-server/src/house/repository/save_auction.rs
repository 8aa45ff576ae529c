use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    // NOTE: Callers mutating an existing auction must hold its lock from
    // `get_or_create_in_memory_auction_lock` while reading and saving it.
    #[tracing::instrument(skip_all, fields(house_id = %house_id, auction_id = %auction.id))]
    pub async fn save_auction(
        &self,
        house_id: entities::HouseId,
        auction: entities::Auction,
    ) -> anyhow::Result<Option<entities::Auction>> {
        self.registry.save_auction(house_id, &auction).await
    }
}
