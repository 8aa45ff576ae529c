use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    pub async fn get_houses(&self, creator_name: Option<&str>) -> Vec<entities::AuctionHouse> {
        match creator_name {
            Some(creator_name) => self.registry.list_houses_by_creator(creator_name).await,
            None => self.registry.list_houses().await,
        }
    }
}
