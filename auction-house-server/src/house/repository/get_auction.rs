use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    pub async fn get_auction(&self, key: entities::AuctionKey) -> Option<entities::Auction> {
        let (house_id, auction_id) = key;
        self.registry.find_auction(house_id, auction_id).await
    }
}
