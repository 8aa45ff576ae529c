use {
    super::entities,
    std::collections::HashMap,
    tokio::sync::Mutex,
};

mod add_house;
mod get_auction;
mod get_house;
mod get_houses;
mod get_or_create_in_memory_auction_lock;
mod models;
mod remove_auction;
mod remove_house;
mod remove_in_memory_auction_lock;
mod save_auction;

pub use models::*;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub auction_lock:        Mutex<HashMap<entities::AuctionKey, entities::AuctionLock>>,
    /// Held while checking a house name for uniqueness and saving the house.
    pub house_creation_lock: Mutex<()>,
}

#[derive(Debug)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
    pub registry:        Box<dyn Registry>,
}

impl Repository {
    pub fn new(registry: impl Registry) -> Self {
        Self {
            in_memory_store: InMemoryStore::default(),
            registry:        Box::new(registry),
        }
    }
}
