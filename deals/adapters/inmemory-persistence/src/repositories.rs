use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use domain_model::Deal;
use deals_persistence_api::{DealRepository, InsertOutcome};

/// Keeps deals in a sharded map. Only the shard that holds an id is locked
/// during its insert, so inserts of unrelated ids do not wait on each other.
#[derive(Default)]
pub struct InMemoryDealRepository {
    storage: DashMap<String, Deal>,
}

impl InMemoryDealRepository {
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl DealRepository for InMemoryDealRepository {
    async fn exists(&self, deal_unique_id: &str) -> Result<bool> {
        Ok(self.storage.contains_key(deal_unique_id))
    }

    async fn insert(&self, deal: Deal) -> Result<InsertOutcome> {
        match self.storage.entry(deal.deal_unique_id.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::Duplicate),
            Entry::Vacant(entry) => {
                entry.insert(deal.clone());
                Ok(InsertOutcome::Inserted(deal))
            }
        }
    }

    async fn get(&self, deal_unique_id: &str) -> Result<Option<Deal>> {
        Ok(self.storage
            .get(deal_unique_id)
            .map(|deal| deal.value().clone()))
    }

    async fn get_all(&self) -> Result<Vec<Deal>> {
        let mut deals: Vec<_> = self.storage
            .iter()
            .map(|deal| deal.value().clone())
            .collect();
        deals.sort_by(|left, right| left.deal_timestamp.cmp(&right.deal_timestamp)
            .then_with(|| left.deal_unique_id.cmp(&right.deal_unique_id)));
        Ok(deals)
    }
}
