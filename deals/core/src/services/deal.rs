use anyhow::Result;
use tracing::{info, warn};

use domain_model::Deal;
use deals_persistence_api::{DealRepository, InsertOutcome};

pub struct DealService<R: DealRepository> {
    repository: R,
}

impl<R: DealRepository> DealService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn save(&self, deal: Deal) -> Result<InsertOutcome> {
        if self.repository.exists(&deal.deal_unique_id).await? {
            warn!("Deal with id '{}' already exists, skipping import", deal.deal_unique_id);
            return Ok(InsertOutcome::Duplicate);
        }
        info!("Saving deal: '{}'", deal.deal_unique_id);
        let deal_unique_id = deal.deal_unique_id.clone();
        let outcome = self.repository.insert(deal).await?;
        if outcome == InsertOutcome::Duplicate {
            // another request stored the same id between the check and the insert
            warn!("Deal with id '{deal_unique_id}' was stored concurrently, skipping import");
        }
        Ok(outcome)
    }

    pub async fn get(&self, deal_unique_id: &str) -> Result<Option<Deal>> {
        self.repository.get(deal_unique_id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Deal>> {
        self.repository.get_all().await
    }
}
