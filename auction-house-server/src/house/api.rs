use {
    super::{
        entities,
        service::{
            bid_on_auction::BidOnAuctionInput,
            create_auction::CreateAuctionInput,
            create_house::CreateHouseInput,
            delete_auction::DeleteAuctionInput,
            delete_house::DeleteHouseInput,
            get_all_bidding::GetAllBiddingInput,
            get_auctions::GetAuctionsInput,
            get_houses::GetHousesInput,
            get_winner::GetWinnerInput,
            update_auction_status::UpdateAuctionStatusInput,
        },
    },
    crate::{
        api::{
            RestError,
            WrappedRouter,
        },
        state::Store,
    },
    auction_house_api_types::{
        auction::{
            Auction,
            AuctionPathParams,
            AuctionStatus,
            AuctionStatusPathParams,
            Bidder,
            Bidding,
            BiddingEntry,
            CreateAuction,
            CreateBid,
            GetAuctionsQueryParams,
        },
        house::{
            CreateHouse,
            CreatorPathParams,
            House,
            HousePathParams,
        },
        ErrorBodyResponse,
        Route,
    },
    axum::{
        extract::{
            Path,
            Query,
            State,
        },
        routing::{
            delete,
            get,
            post,
            put,
        },
        Json,
        Router,
    },
    std::sync::Arc,
};

/// Create a new auction house.
///
/// House names are unique across the server.
#[utoipa::path(post, path = "/v1/houses", request_body = CreateHouse, responses(
    (status = 200, description = "Auction house was created successfully", body = House),
    (status = 400, response = ErrorBodyResponse),
),)]
pub async fn post_house(
    State(store): State<Arc<Store>>,
    Json(create_house): Json<CreateHouse>,
) -> Result<Json<House>, RestError> {
    let house = store
        .house_service
        .create_house(CreateHouseInput {
            house_create: get_house_create(create_house)?,
        })
        .await?;
    Ok(Json(house.into()))
}

/// List all auction houses.
#[utoipa::path(get, path = "/v1/houses", responses(
    (status = 200, body = Vec<House>),
),)]
pub async fn get_houses(State(store): State<Arc<Store>>) -> Json<Vec<House>> {
    let houses = store
        .house_service
        .get_houses(GetHousesInput { creator_name: None })
        .await;
    Json(houses.into_iter().map(|house| house.into()).collect())
}

/// List the auction houses created by a specific user.
#[utoipa::path(get, path = "/v1/houses/creator/{creator_name}", params(CreatorPathParams), responses(
    (status = 200, body = Vec<House>),
),)]
pub async fn get_houses_by_creator(
    State(store): State<Arc<Store>>,
    Path(params): Path<CreatorPathParams>,
) -> Json<Vec<House>> {
    let houses = store
        .house_service
        .get_houses(GetHousesInput {
            creator_name: Some(params.creator_name),
        })
        .await;
    Json(houses.into_iter().map(|house| house.into()).collect())
}

/// Delete an auction house together with all of its auctions.
#[utoipa::path(delete, path = "/v1/houses/{house_id}", params(HousePathParams), responses(
    (status = 200, description = "Auction house was deleted", body = bool),
    (status = 404, description = "Auction house was not found", body = ErrorBodyResponse),
),)]
pub async fn delete_house(
    State(store): State<Arc<Store>>,
    Path(params): Path<HousePathParams>,
) -> Result<Json<bool>, RestError> {
    let deleted = store
        .house_service
        .delete_house(DeleteHouseInput {
            house_id: params.house_id,
        })
        .await?;
    Ok(Json(deleted))
}

/// Create a new auction in an auction house.
///
/// The auction starts in the NOT_STARTED status unless another status is provided.
#[utoipa::path(post, path = "/v1/houses/{house_id}/auctions", request_body = CreateAuction,
    params(HousePathParams),
    responses(
    (status = 200, description = "Auction was created successfully", body = Auction),
    (status = 400, response = ErrorBodyResponse),
    (status = 404, description = "Auction house was not found", body = ErrorBodyResponse),
),)]
pub async fn post_auction(
    State(store): State<Arc<Store>>,
    Path(params): Path<HousePathParams>,
    Json(create_auction): Json<CreateAuction>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .house_service
        .create_auction(CreateAuctionInput {
            house_id:       params.house_id,
            auction_create: get_auction_create(create_auction)?,
        })
        .await?;
    Ok(Json(auction.into()))
}

/// List the auctions of an auction house, optionally filtered by status.
#[utoipa::path(get, path = "/v1/houses/{house_id}/auctions",
    params(HousePathParams, GetAuctionsQueryParams),
    responses(
    (status = 200, body = Vec<Auction>),
    (status = 404, description = "Auction house was not found", body = ErrorBodyResponse),
),)]
pub async fn get_auctions(
    State(store): State<Arc<Store>>,
    Path(params): Path<HousePathParams>,
    Query(query): Query<GetAuctionsQueryParams>,
) -> Result<Json<Vec<Auction>>, RestError> {
    let auctions = store
        .house_service
        .get_auctions(GetAuctionsInput {
            house_id: params.house_id,
            status:   query.status.map(|status| status.into()),
        })
        .await?;
    Ok(Json(auctions.into_iter().map(|auction| auction.into()).collect()))
}

/// Delete an auction from its auction house.
#[utoipa::path(delete, path = "/v1/houses/{house_id}/auctions/{auction_id}",
    params(AuctionPathParams),
    responses(
    (status = 200, description = "Auction was deleted", body = bool),
    (status = 404, description = "Auction house or auction was not found", body = ErrorBodyResponse),
),)]
pub async fn delete_auction(
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionPathParams>,
) -> Result<Json<bool>, RestError> {
    let deleted = store
        .house_service
        .delete_auction(DeleteAuctionInput {
            house_id:   params.house_id,
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(deleted))
}

/// Move an auction to another status.
///
/// Terminated auctions cannot change status anymore.
#[utoipa::path(put, path = "/v1/houses/{house_id}/auctions/{auction_id}/status/{status}",
    params(AuctionStatusPathParams),
    responses(
    (status = 200, description = "Auction status was updated", body = Auction),
    (status = 400, response = ErrorBodyResponse),
    (status = 404, description = "Auction house or auction was not found", body = ErrorBodyResponse),
),)]
pub async fn put_auction_status(
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionStatusPathParams>,
) -> Result<Json<Auction>, RestError> {
    let auction = store
        .house_service
        .update_auction_status(UpdateAuctionStatusInput {
            house_id:   params.house_id,
            auction_id: params.auction_id,
            new_status: params.status.into(),
        })
        .await?;
    Ok(Json(auction.into()))
}

/// Bid on a running auction.
///
/// The bid is accepted only if its price is strictly higher than both the current and the initial price of the auction.
#[utoipa::path(post, path = "/v1/houses/{house_id}/auctions/{auction_id}/bids", request_body = CreateBid,
    params(AuctionPathParams),
    responses(
    (status = 200, description = "Bid was accepted", body = Bidder),
    (status = 400, response = ErrorBodyResponse),
    (status = 404, description = "Auction house or auction was not found", body = ErrorBodyResponse),
),)]
pub async fn post_bid(
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionPathParams>,
    Json(create_bid): Json<CreateBid>,
) -> Result<Json<Bidder>, RestError> {
    let bidder = store
        .house_service
        .bid_on_auction(BidOnAuctionInput {
            house_id:      params.house_id,
            auction_id:    params.auction_id,
            bidder_create: get_bidder_create(create_bid)?,
        })
        .await?;
    Ok(Json(bidder.into()))
}

/// List every accepted bid of an auction, keyed by bidder id.
#[utoipa::path(get, path = "/v1/houses/{house_id}/auctions/{auction_id}/bids",
    params(AuctionPathParams),
    responses(
    (status = 200, body = Bidding),
    (status = 404, description = "Auction house or auction was not found", body = ErrorBodyResponse),
),)]
pub async fn get_bids(
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionPathParams>,
) -> Result<Json<Bidding>, RestError> {
    let bidding = store
        .house_service
        .get_all_bidding(GetAllBiddingInput {
            house_id:   params.house_id,
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(Bidding {
        bids: bidding
            .into_iter()
            .map(|(id, entry)| (id, entry.into()))
            .collect(),
    }))
}

/// Get the winning bid of a terminated auction.
#[utoipa::path(get, path = "/v1/houses/{house_id}/auctions/{auction_id}/winner",
    params(AuctionPathParams),
    responses(
    (status = 200, body = Bidder),
    (status = 400, response = ErrorBodyResponse),
    (status = 404, description = "Auction house, auction or bids were not found", body = ErrorBodyResponse),
),)]
pub async fn get_winner(
    State(store): State<Arc<Store>>,
    Path(params): Path<AuctionPathParams>,
) -> Result<Json<Bidder>, RestError> {
    let winner = store
        .house_service
        .get_winner(GetWinnerInput {
            house_id:   params.house_id,
            auction_id: params.auction_id,
        })
        .await?;
    Ok(Json(winner.into()))
}

pub fn get_routes() -> Router<Arc<Store>> {
    WrappedRouter::new()
        .route(Route::Root, post(post_house).get(get_houses))
        .route(Route::HousesByCreator, get(get_houses_by_creator))
        .route(Route::House, delete(delete_house))
        .route(Route::Auctions, post(post_auction).get(get_auctions))
        .route(Route::Auction, delete(delete_auction))
        .route(Route::AuctionStatus, put(put_auction_status))
        .route(Route::Bids, post(post_bid).get(get_bids))
        .route(Route::Winner, get(get_winner))
        .router
}

fn check_not_blank(field: &str, value: &str) -> Result<(), RestError> {
    if value.trim().is_empty() {
        return Err(RestError::BadParameters(format!("{} must not be blank", field)));
    }
    Ok(())
}

fn check_price(field: &str, price: entities::Price) -> Result<(), RestError> {
    if !price.is_finite() || price < 0.0 {
        return Err(RestError::BadParameters(format!(
            "{} must be a finite non-negative number",
            field
        )));
    }
    Ok(())
}

fn get_house_create(create_house: CreateHouse) -> Result<entities::HouseCreate, RestError> {
    check_not_blank("name", &create_house.name)?;
    check_not_blank("creator_name", &create_house.creator_name)?;
    Ok(entities::HouseCreate {
        name:         create_house.name,
        creator_name: create_house.creator_name,
    })
}

fn get_auction_create(create_auction: CreateAuction) -> Result<entities::AuctionCreate, RestError> {
    check_not_blank("name", &create_auction.name)?;
    check_price("initial_price", create_auction.initial_price)?;
    check_price("current_price", create_auction.current_price)?;
    if let (Some(starting_time), Some(end_time)) =
        (create_auction.starting_time, create_auction.end_time)
    {
        if end_time < starting_time {
            return Err(RestError::BadParameters(
                "end_time must not precede starting_time".to_string(),
            ));
        }
    }
    Ok(entities::AuctionCreate {
        name:          create_auction.name,
        description:   create_auction.description,
        starting_time: create_auction.starting_time,
        end_time:      create_auction.end_time,
        max_bidders:   create_auction.max_bidders,
        status:        create_auction.status.map(|status| status.into()),
        initial_price: create_auction.initial_price,
        current_price: create_auction.current_price,
    })
}

fn get_bidder_create(create_bid: CreateBid) -> Result<entities::BidderCreate, RestError> {
    check_not_blank("name", &create_bid.name)?;
    check_price("price", create_bid.price)?;
    if create_bid.price == 0.0 {
        return Err(RestError::BadParameters(
            "price must be strictly positive".to_string(),
        ));
    }
    Ok(entities::BidderCreate {
        name:         create_bid.name,
        bidding_time: create_bid.bidding_time,
        price:        create_bid.price,
    })
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::NotStarted => entities::AuctionStatus::NotStarted,
            AuctionStatus::Running => entities::AuctionStatus::Running,
            AuctionStatus::Terminated => entities::AuctionStatus::Terminated,
            AuctionStatus::Deleted => entities::AuctionStatus::Deleted,
        }
    }
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::NotStarted => AuctionStatus::NotStarted,
            entities::AuctionStatus::Running => AuctionStatus::Running,
            entities::AuctionStatus::Terminated => AuctionStatus::Terminated,
            entities::AuctionStatus::Deleted => AuctionStatus::Deleted,
        }
    }
}

impl From<entities::Bidder> for Bidder {
    fn from(bidder: entities::Bidder) -> Self {
        Self {
            id:           bidder.id,
            name:         bidder.name,
            bidding_time: bidder.bidding_time,
            price:        bidder.price,
        }
    }
}

impl From<entities::BiddingEntry> for BiddingEntry {
    fn from(entry: entities::BiddingEntry) -> Self {
        Self {
            name:  entry.name,
            price: entry.price,
        }
    }
}

impl From<entities::Auction> for Auction {
    fn from(auction: entities::Auction) -> Self {
        let mut bidders: Vec<Bidder> = auction
            .bidders
            .into_values()
            .map(|bidder| bidder.into())
            .collect();
        bidders.sort_by_key(|bidder| bidder.bidding_time);
        Self {
            id: auction.id,
            name: auction.name,
            description: auction.description,
            creator_name: auction.creator_name,
            starting_time: auction.starting_time,
            end_time: auction.end_time,
            max_bidders: auction.max_bidders,
            status: auction.status.into(),
            initial_price: auction.initial_price,
            current_price: auction.current_price,
            bidders,
        }
    }
}

impl From<entities::AuctionHouse> for House {
    fn from(house: entities::AuctionHouse) -> Self {
        Self {
            id:           house.id,
            name:         house.name,
            creator_name: house.creator_name,
            auctions:     house
                .auctions
                .into_values()
                .map(|auction| auction.into())
                .collect(),
        }
    }
}
