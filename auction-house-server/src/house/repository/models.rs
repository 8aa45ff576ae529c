#[cfg(test)]
use mockall::automock;
use {
    crate::house::entities,
    axum::async_trait,
    std::{
        collections::HashMap,
        fmt::Debug,
    },
    tokio::sync::RwLock,
};

/// Storage of auction houses and of the auctions they own.
///
/// Lookups never fail, they return `None` or an empty list. Mutations return an error only
/// when the backing storage itself fails.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Registry: Debug + Send + Sync + 'static {
    async fn find_house_by_name(&self, name: &str) -> Option<entities::AuctionHouse>;
    async fn find_house_by_id(&self, house_id: entities::HouseId)
        -> Option<entities::AuctionHouse>;
    async fn save_house(
        &self,
        house: &entities::AuctionHouse,
    ) -> anyhow::Result<entities::AuctionHouse>;
    async fn list_houses(&self) -> Vec<entities::AuctionHouse>;
    async fn list_houses_by_creator(&self, creator_name: &str) -> Vec<entities::AuctionHouse>;
    async fn delete_house(&self, house_id: entities::HouseId) -> anyhow::Result<bool>;
    async fn delete_all_houses(&self) -> anyhow::Result<()>;
    async fn delete_auction(
        &self,
        house_id: entities::HouseId,
        auction_id: entities::AuctionId,
    ) -> anyhow::Result<bool>;
    async fn find_auction(
        &self,
        house_id: entities::HouseId,
        auction_id: entities::AuctionId,
    ) -> Option<entities::Auction>;
    /// Upserts a single auction inside its house. Returns `None` if the house does not exist.
    async fn save_auction(
        &self,
        house_id: entities::HouseId,
        auction: &entities::Auction,
    ) -> anyhow::Result<Option<entities::Auction>>;
}

#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    houses: RwLock<HashMap<entities::HouseId, entities::AuctionHouse>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn find_house_by_name(&self, name: &str) -> Option<entities::AuctionHouse> {
        self.houses
            .read()
            .await
            .values()
            .find(|house| house.name == name)
            .cloned()
    }

    async fn find_house_by_id(
        &self,
        house_id: entities::HouseId,
    ) -> Option<entities::AuctionHouse> {
        self.houses.read().await.get(&house_id).cloned()
    }

    async fn save_house(
        &self,
        house: &entities::AuctionHouse,
    ) -> anyhow::Result<entities::AuctionHouse> {
        self.houses.write().await.insert(house.id, house.clone());
        Ok(house.clone())
    }

    async fn list_houses(&self) -> Vec<entities::AuctionHouse> {
        self.houses.read().await.values().cloned().collect()
    }

    async fn list_houses_by_creator(&self, creator_name: &str) -> Vec<entities::AuctionHouse> {
        self.houses
            .read()
            .await
            .values()
            .filter(|house| house.creator_name == creator_name)
            .cloned()
            .collect()
    }

    async fn delete_house(&self, house_id: entities::HouseId) -> anyhow::Result<bool> {
        Ok(self.houses.write().await.remove(&house_id).is_some())
    }

    async fn delete_all_houses(&self) -> anyhow::Result<()> {
        self.houses.write().await.clear();
        Ok(())
    }

    async fn delete_auction(
        &self,
        house_id: entities::HouseId,
        auction_id: entities::AuctionId,
    ) -> anyhow::Result<bool> {
        Ok(self
            .houses
            .write()
            .await
            .get_mut(&house_id)
            .and_then(|house| house.auctions.remove(&auction_id))
            .is_some())
    }

    async fn find_auction(
        &self,
        house_id: entities::HouseId,
        auction_id: entities::AuctionId,
    ) -> Option<entities::Auction> {
        self.houses
            .read()
            .await
            .get(&house_id)
            .and_then(|house| house.auctions.get(&auction_id))
            .cloned()
    }

    async fn save_auction(
        &self,
        house_id: entities::HouseId,
        auction: &entities::Auction,
    ) -> anyhow::Result<Option<entities::Auction>> {
        Ok(self
            .houses
            .write()
            .await
            .get_mut(&house_id)
            .map(|house| {
                house.add_auction(auction.clone());
                auction.clone()
            }))
    }
}
