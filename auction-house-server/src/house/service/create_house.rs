use {
    super::Service,
    crate::{
        api::RestError,
        house::entities,
    },
};

pub struct CreateHouseInput {
    pub house_create: entities::HouseCreate,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(name = %input.house_create.name))]
    pub async fn create_house(
        &self,
        input: CreateHouseInput,
    ) -> Result<entities::AuctionHouse, RestError> {
        let _guard = self.repo.in_memory_store.house_creation_lock.lock().await;
        if self
            .repo
            .get_house_by_name(&input.house_create.name)
            .await
            .is_some()
        {
            return Err(RestError::HouseAlreadyExists);
        }

        self.repo
            .add_house(entities::AuctionHouse::new(input.house_create))
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to add auction house");
                RestError::GeneralFailure
            })
    }
}
