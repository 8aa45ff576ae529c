use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    pub async fn remove_auction(&self, key: entities::AuctionKey) -> anyhow::Result<bool> {
        let (house_id, auction_id) = key;
        self.registry.delete_auction(house_id, auction_id).await
    }
}
