use {
    super::Repository,
    crate::house::entities,
};

impl Repository {
    pub async fn remove_house(&self, house_id: entities::HouseId) -> anyhow::Result<bool> {
        self.registry.delete_house(house_id).await
    }
}
