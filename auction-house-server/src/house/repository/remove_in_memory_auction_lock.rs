use {
    super::Repository,
    crate::house::entities,
    std::sync::Arc,
};

impl Repository {
    pub async fn remove_in_memory_auction_lock(&self, key: &entities::AuctionKey) {
        let mut mutex_guard = self.in_memory_store.auction_lock.lock().await;
        let auction_lock = mutex_guard.get(key);
        if let Some(auction_lock) = auction_lock {
            // Whenever there is no task borrowing a lock for this key, we can remove it from the locks HashMap.
            if Arc::strong_count(auction_lock) == 1 {
                mutex_guard.remove(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::house::repository::{
            InMemoryRegistry,
            Repository,
        },
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_lock_is_shared_then_released() {
        let repo = Repository::new(InMemoryRegistry::new());
        let key = (Uuid::new_v4(), Uuid::new_v4());

        let first = repo.get_or_create_in_memory_auction_lock(key).await;
        let second = repo.get_or_create_in_memory_auction_lock(key).await;
        assert!(std::sync::Arc::ptr_eq(&first, &second));

        drop(second);
        repo.remove_in_memory_auction_lock(&key).await;
        assert!(repo
            .in_memory_store
            .auction_lock
            .lock()
            .await
            .contains_key(&key));

        drop(first);
        repo.remove_in_memory_auction_lock(&key).await;
        assert!(repo.in_memory_store.auction_lock.lock().await.is_empty());
    }
}
