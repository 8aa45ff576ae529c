use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    pub async fn get_house_by_id(
        &self,
        house_id: entities::HouseId,
    ) -> Option<entities::AuctionHouse> {
        self.registry.find_house_by_id(house_id).await
    }

    pub async fn get_house_by_name(&self, name: &str) -> Option<entities::AuctionHouse> {
        self.registry.find_house_by_name(name).await
    }
}
