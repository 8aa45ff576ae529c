use {
    super::Service,
    crate::house::entities,
};

pub struct GetHousesInput {
    /// Only return the houses created by this user.
    pub creator_name: Option<String>,
}

impl Service {
    pub async fn get_houses(&self, input: GetHousesInput) -> Vec<entities::AuctionHouse> {
        self.repo.get_houses(input.creator_name.as_deref()).await
    }
}
