use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use domain_model::{CreateDeal, Deal};
use deals_core_api::{DealsApi, ImportReport};
use deals_persistence_api::DealRepository;

use crate::services::deal::DealService;
use crate::services::import::ImportService;

pub struct Deals<R: DealRepository> {
    deal_service: Arc<DealService<R>>,
    import_service: ImportService<R>,
}

impl<R: DealRepository> Deals<R> {
    pub fn new(deal_repository: R) -> Self {
        let deal_service = Arc::new(DealService::new(deal_repository));
        let import_service = ImportService::new(Arc::clone(&deal_service));
        Self {
            deal_service,
            import_service,
        }
    }
}

#[async_trait]
impl<R: DealRepository> DealsApi for Deals<R> {
    async fn import_deals(&self, deals: Vec<Option<CreateDeal>>) -> Result<ImportReport> {
        Ok(self.import_service.import(deals).await)
    }

    async fn get_deals(&self) -> Result<Vec<Deal>> {
        self.deal_service.get_all().await
    }

    async fn get_deal(&self, deal_unique_id: &str) -> Result<Option<Deal>> {
        self.deal_service.get(deal_unique_id).await
    }
}
