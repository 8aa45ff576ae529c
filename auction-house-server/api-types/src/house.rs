use {
    crate::auction::Auction,
    serde::{
        Deserialize,
        Serialize,
    },
    utoipa::{
        IntoParams,
        ToResponse,
        ToSchema,
    },
    uuid::Uuid,
};

pub type HouseId = Uuid;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateHouse {
    /// The name of the auction house. Must be unique across all houses.
    #[schema(example = "Spideo")]
    pub name:         String,
    /// The name of the user creating the auction house.
    #[schema(example = "Elliott")]
    pub creator_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, ToResponse, Clone, Debug, PartialEq)]
pub struct House {
    /// The id of the auction house.
    #[schema(example = "0b03ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub id:           HouseId,
    /// The name of the auction house.
    #[schema(example = "Spideo")]
    pub name:         String,
    /// The name of the user who created the auction house.
    #[schema(example = "Elliott")]
    pub creator_name: String,
    /// The auctions hosted by this house, in no particular order.
    pub auctions:     Vec<Auction>,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
#[into_params(parameter_in = Path)]
pub struct HousePathParams {
    #[param(example = "0b03ee3e-58cc-4372-a567-0e02b2c3d479", value_type = String)]
    pub house_id: HouseId,
}

#[derive(Serialize, Deserialize, IntoParams, Clone, Debug)]
#[into_params(parameter_in = Path)]
pub struct CreatorPathParams {
    #[param(example = "Elliott")]
    pub creator_name: String,
}
