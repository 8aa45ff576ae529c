use {
    super::repository::{
        self,
        Registry,
        Repository,
    },
    std::sync::Arc,
};

pub mod bid_on_auction;
pub mod create_auction;
pub mod create_house;
pub mod delete_auction;
pub mod delete_house;
pub mod get_all_bidding;
pub mod get_auction;
pub mod get_auctions;
pub mod get_houses;
pub mod get_winner;
pub mod update_auction_status;

pub const BIDS_TOTAL_METRIC: &str = "bids_total";

#[derive(Debug, Clone)]
pub struct Config {
    /// Reject status updates on DELETED auctions the same way as on TERMINATED ones.
    pub deleted_is_final: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deleted_is_final: true,
        }
    }
}

#[derive(Debug)]
pub struct ServiceInner {
    config: Config,
    repo:   Arc<Repository>,
}

#[derive(Clone, Debug)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(registry: impl Registry, config: Config) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(repository::Repository::new(registry)),
        }))
    }
}
