use {
    super::{
        get_auction::GetHouseInput,
        Service,
    },
    crate::{
        api::RestError,
        house::entities,
    },
};

pub struct DeleteHouseInput {
    pub house_id: entities::HouseId,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(house_id = %input.house_id))]
    pub async fn delete_house(&self, input: DeleteHouseInput) -> Result<bool, RestError> {
        let house = self
            .get_house(GetHouseInput {
                house_id: input.house_id,
            })
            .await?;
        let deleted = self.repo.remove_house(house.id).await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to delete auction house");
            RestError::GeneralFailure
        })?;
        // Someone else removed it between the lookup and the deletion.
        if !deleted {
            return Err(RestError::HouseNotFound);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::house::service::get_houses::GetHousesInput,
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_delete_house() {
        let service = Service::new_in_memory();
        let house = service.create_test_house("Spideo").await;
        let other = service.create_test_house("Other").await;

        assert_eq!(
            service
                .delete_house(DeleteHouseInput { house_id: house.id })
                .await,
            Ok(true)
        );

        let houses = service
            .get_houses(GetHousesInput { creator_name: None })
            .await;
        assert_eq!(houses, vec![other]);
        assert_eq!(
            service
                .get_house(GetHouseInput { house_id: house.id })
                .await,
            Err(RestError::HouseNotFound)
        );
    }

    #[tokio::test]
    async fn test_delete_missing_house() {
        let service = Service::new_in_memory();
        assert_eq!(
            service
                .delete_house(DeleteHouseInput {
                    house_id: Uuid::new_v4(),
                })
                .await,
            Err(RestError::HouseNotFound)
        );
    }
}
