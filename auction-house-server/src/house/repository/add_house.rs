use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    pub async fn add_house(
        &self,
        house: entities::AuctionHouse,
    ) -> anyhow::Result<entities::AuctionHouse> {
        self.registry.save_house(&house).await
    }
}
