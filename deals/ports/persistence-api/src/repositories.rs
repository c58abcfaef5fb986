use anyhow::Result;
use async_trait::async_trait;

use domain_model::Deal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(Deal),
    Duplicate,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }
}

#[async_trait]
pub trait DealRepository: Send + Sync + 'static {
    async fn exists(&self, deal_unique_id: &str) -> Result<bool>;
    /// Atomic insert-if-absent: a deal whose id is already stored is left
    /// untouched and `InsertOutcome::Duplicate` is returned.
    async fn insert(&self, deal: Deal) -> Result<InsertOutcome>;
    async fn get(&self, deal_unique_id: &str) -> Result<Option<Deal>>;
    async fn get_all(&self) -> Result<Vec<Deal>>;
}
