use {
    crate::{
        config::RunOptions,
        house,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::Store,
    },
    anyhow::Result,
    auction_house_api_types::{
        auction::{
            Auction,
            AuctionStatus,
            Bidder,
            Bidding,
            BiddingEntry,
            CreateAuction,
            CreateBid,
        },
        house::{
            CreateHouse,
            House,
        },
        ErrorBodyResponse,
        Route,
    },
    axum::{
        http::StatusCode,
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            MethodRouter,
        },
        Json,
        Router,
    },
    axum_prometheus::PrometheusMetricLayer,
    clap::crate_version,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tower_http::cors::CorsLayer,
    utoipa::OpenApi,
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

async fn root() -> String {
    format!("Auction House Server API {}", crate_version!())
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// An auction house with the same name already exists
    HouseAlreadyExists,
    /// The auction house was not found
    HouseNotFound,
    /// The auction was not found
    AuctionNotFound,
    /// The auction is terminated and cannot change status anymore
    AuctionAlreadyFinished,
    /// The auction does not accept bids
    AuctionNotStarted,
    /// The bid is not higher than the current price
    BidPriceTooLow,
    /// The auction has no winner until it is terminated
    AuctionNotFinished,
    /// The terminated auction received no bid
    NoBidsFound,
    /// Internal error occurred during processing the request
    GeneralFailure,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::HouseAlreadyExists => (
                StatusCode::BAD_REQUEST,
                "An auction house with the same name already exists".to_string(),
            ),
            RestError::HouseNotFound => (
                StatusCode::NOT_FOUND,
                "Auction house with the specified id was not found".to_string(),
            ),
            RestError::AuctionNotFound => (
                StatusCode::NOT_FOUND,
                "Auction with the specified id was not found".to_string(),
            ),
            RestError::AuctionAlreadyFinished => (
                StatusCode::BAD_REQUEST,
                "The auction is already finished".to_string(),
            ),
            RestError::AuctionNotStarted => (
                StatusCode::BAD_REQUEST,
                "The auction is not running".to_string(),
            ),
            RestError::BidPriceTooLow => (
                StatusCode::BAD_REQUEST,
                "The bid price must be higher than the current price".to_string(),
            ),
            RestError::AuctionNotFinished => (
                StatusCode::BAD_REQUEST,
                "The auction is not finished yet".to_string(),
            ),
            RestError::NoBidsFound => (
                StatusCode::NOT_FOUND,
                "No bids were placed on this auction".to_string(),
            ),
            RestError::GeneralFailure => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_status_and_message().1)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// Registers handlers on the paths of [`Route`] so path strings live in one place.
#[derive(Default)]
pub struct WrappedRouter {
    pub router: Router<Arc<Store>>,
}

impl WrappedRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, route: Route, method_router: MethodRouter<Arc<Store>>) -> Self {
        Self {
            router: self.router.route(route.as_ref(), method_router),
        }
    }
}

pub async fn start_api(
    run_options: RunOptions,
    store: Arc<Store>,
    metric_layer: PrometheusMetricLayer<'static>,
) -> Result<()> {
    // Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    house::api::post_house,
    house::api::get_houses,
    house::api::get_houses_by_creator,
    house::api::delete_house,
    house::api::post_auction,
    house::api::get_auctions,
    house::api::delete_auction,
    house::api::put_auction_status,
    house::api::post_bid,
    house::api::get_bids,
    house::api::get_winner,
    ),
    components(
    schemas(
    Auction,
    AuctionStatus,
    Bidder,
    Bidding,
    BiddingEntry,
    CreateAuction,
    CreateBid,
    CreateHouse,
    House,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    Auction,
    Bidder,
    Bidding,
    House,
    ),
    ),
    tags(
    (name = "Auction House Server", description = "Auction House Server hosts auction houses and \
    their auctions. It accepts competitive bids on running auctions and resolves their winners.")
    )
    )]
    struct ApiDoc;

    let v1_routes = Router::new().nest(
        Route::V1.as_ref(),
        Router::new().nest(Route::Houses.as_ref(), house::api::get_routes()),
    );

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url(Route::Docs.as_ref().to_string(), ApiDoc::openapi()))
        .route(
            Route::OpenApi.as_ref(),
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(v1_routes)
        .route(Route::Root.as_ref(), get(root))
        .route(Route::Liveness.as_ref(), get(live))
        .layer(CorsLayer::permissive())
        .layer(metric_layer)
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!(addr = %run_options.server.listen_addr, "Starting API server...");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down API server...");
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (RestError::BadParameters("x".to_string()), StatusCode::BAD_REQUEST),
            (RestError::HouseAlreadyExists, StatusCode::BAD_REQUEST),
            (RestError::HouseNotFound, StatusCode::NOT_FOUND),
            (RestError::AuctionNotFound, StatusCode::NOT_FOUND),
            (RestError::AuctionAlreadyFinished, StatusCode::BAD_REQUEST),
            (RestError::AuctionNotStarted, StatusCode::BAD_REQUEST),
            (RestError::BidPriceTooLow, StatusCode::BAD_REQUEST),
            (RestError::AuctionNotFinished, StatusCode::BAD_REQUEST),
            (RestError::NoBidsFound, StatusCode::NOT_FOUND),
            (RestError::GeneralFailure, StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (error, status) in cases {
            assert_eq!(error.to_status_and_message().0, status, "{:?}", error);
        }
    }

    #[test]
    fn test_bad_parameters_message() {
        let (_, message) =
            RestError::BadParameters("name must not be blank".to_string()).to_status_and_message();
        assert_eq!(message, "Bad parameters: name must not be blank");
    }
}
