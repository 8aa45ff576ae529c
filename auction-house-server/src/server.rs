use {
    crate::{
        api,
        config::{
            Config,
            RunOptions,
        },
        house::{
            entities,
            repository::InMemoryRegistry,
            service::{
                create_house::CreateHouseInput,
                Service,
            },
        },
        metrics_api::start_metrics,
        state::Store,
    },
    anyhow::anyhow,
    axum_prometheus::PrometheusMetricLayer,
    futures::future::join_all,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
};

async fn create_seed_houses(service: &Service, config: &Config) -> anyhow::Result<()> {
    for house in &config.houses {
        let created = service
            .create_house(CreateHouseInput {
                house_create: entities::HouseCreate {
                    name:         house.name.clone(),
                    creator_name: house.creator_name.clone(),
                },
            })
            .await
            .map_err(|err| {
                anyhow!(
                    "Failed to create auction house({name}) from config: {:?}",
                    err,
                    name = house.name
                )
            })?;
        tracing::info!(house_id = %created.id, name = %created.name, "Created auction house from config");
    }
    Ok(())
}

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?err, "Failed to listen for the shutdown signal");
            return;
        }
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;

    let house_service = Service::new(InMemoryRegistry::new(), config.rules.clone().into());
    create_seed_houses(&house_service, &config).await?;

    let (metric_layer, metrics_recorder) = PrometheusMetricLayer::pair();
    let store = Arc::new(Store {
        house_service,
        metrics_recorder,
    });

    let server_loop = tokio::spawn(api::start_api(
        run_options.clone(),
        store.clone(),
        metric_layer,
    ));
    let metrics_loop = tokio::spawn(start_metrics(run_options, store.clone()));
    for result in join_all(vec![server_loop, metrics_loop]).await {
        result??;
    }
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            api::RestError,
            config::SeedHouseConfig,
            house::service::get_houses::GetHousesInput,
        },
    };

    fn seed(name: &str, creator_name: &str) -> SeedHouseConfig {
        SeedHouseConfig {
            name:         name.to_string(),
            creator_name: creator_name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_seed_houses() {
        let service = Service::new_in_memory();
        let config = Config {
            houses: vec![seed("Spideo", "Elliott"), seed("Drouot", "Amrane")],
            ..Default::default()
        };
        create_seed_houses(&service, &config).await.unwrap();

        let houses = service
            .get_houses(GetHousesInput { creator_name: None })
            .await;
        assert_eq!(houses.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_house_name_clash_is_fatal() {
        let service = Service::new_in_memory();
        let config = Config {
            houses: vec![seed("Spideo", "Elliott"), seed("Spideo", "Amrane")],
            ..Default::default()
        };
        let err = create_seed_houses(&service, &config).await.unwrap_err();
        assert!(err
            .to_string()
            .contains(&format!("{:?}", RestError::HouseAlreadyExists)));
    }
}
