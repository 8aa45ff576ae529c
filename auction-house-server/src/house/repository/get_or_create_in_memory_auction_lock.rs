use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    pub async fn get_or_create_in_memory_auction_lock(
        &self,
        key: entities::AuctionKey,
    ) -> entities::AuctionLock {
        self.in_memory_store
            .auction_lock
            .lock()
            .await
            .entry(key)
            .or_default()
            .clone()
    }
}
