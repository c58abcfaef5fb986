use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error, info};

use domain_model::CreateDeal;
use domain_model::mapping::to_entity;
use deals_core_api::ImportReport;
use deals_persistence_api::{DealRepository, InsertOutcome};

use crate::services::deal::DealService;

pub struct ImportService<R: DealRepository> {
    deal_service: Arc<DealService<R>>,
}

impl<R: DealRepository> ImportService<R> {
    pub fn new(deal_service: Arc<DealService<R>>) -> Self {
        Self { deal_service }
    }

    /// Records are processed one by one in batch order. Each one is stored on
    /// its own, there is no scope spanning the batch.
    pub async fn import(&self, deals: Vec<Option<CreateDeal>>) -> ImportReport {
        info!("Import of {} deals", deals.len());
        let mut report = ImportReport::default();
        for request in deals {
            let deal_unique_id = request
                .as_ref()
                .and_then(|request| request.deal_unique_id.clone())
                .unwrap_or_default();
            match self.import_one(request).await {
                Ok(InsertOutcome::Inserted(deal)) => {
                    debug!("Imported deal: {deal:?}");
                    report.imported += 1;
                }
                Ok(InsertOutcome::Duplicate) => report.skipped += 1,
                Err(err) => {
                    error!("Failed to import deal '{deal_unique_id}': {err:#}");
                    report.skipped += 1;
                }
            }
        }
        info!("Finish deals import: {report:?}");
        report
    }

    async fn import_one(&self, request: Option<CreateDeal>) -> Result<InsertOutcome> {
        let deal = to_entity(request)?;
        self.deal_service.save(deal).await
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use domain_model::Deal;
    use deals_inmemory_persistence::InMemoryDealRepository;

    use super::*;

    fn create_deal(id: &str) -> Option<CreateDeal> {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            .and_hms_opt(10, 0, 0).unwrap();
        Some(CreateDeal::new(id, "USD", "EUR", timestamp, Decimal::from(100)))
    }

    fn import_service<R: DealRepository>(repository: R) -> ImportService<R> {
        ImportService::new(Arc::new(DealService::new(repository)))
    }

    /// Fails every write of an id starting with "broken".
    #[derive(Default)]
    struct BrokenWritesRepository {
        delegate: InMemoryDealRepository,
    }

    #[async_trait]
    impl DealRepository for BrokenWritesRepository {
        async fn exists(&self, deal_unique_id: &str) -> Result<bool> {
            self.delegate.exists(deal_unique_id).await
        }

        async fn insert(&self, deal: Deal) -> Result<InsertOutcome> {
            if deal.deal_unique_id.starts_with("broken") {
                bail!("connection reset");
            }
            self.delegate.insert(deal).await
        }

        async fn get(&self, deal_unique_id: &str) -> Result<Option<Deal>> {
            self.delegate.get(deal_unique_id).await
        }

        async fn get_all(&self) -> Result<Vec<Deal>> {
            self.delegate.get_all().await
        }
    }

    #[tokio::test]
    async fn test_import_empty_batch() {
        let service = import_service(InMemoryDealRepository::default());

        let report = service.import(Vec::new()).await;

        assert_eq!(report, ImportReport { imported: 0, skipped: 0 });
        assert_eq!(report.to_string(), "Imported 0 deals. Skipped 0 duplicates/errors.");
    }

    #[tokio::test]
    async fn test_import_skips_duplicates_within_batch() {
        let service = import_service(InMemoryDealRepository::default());

        let report = service.import(vec![create_deal("d1"), create_deal("d2"), create_deal("d1")]).await;

        assert_eq!(report, ImportReport { imported: 2, skipped: 1 });
    }

    #[tokio::test]
    async fn test_import_skips_previously_stored_deal() {
        let service = import_service(InMemoryDealRepository::default());
        service.import(vec![create_deal("d1")]).await;

        let report = service.import(vec![create_deal("d1"), create_deal("d2")]).await;

        assert_eq!(report.to_string(), "Imported 1 deals. Skipped 1 duplicates/errors.");
        let ids: Vec<_> = service.deal_service.get_all().await.unwrap()
            .into_iter()
            .map(|deal| deal.deal_unique_id)
            .collect();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    #[tokio::test]
    async fn test_unmappable_record_is_skipped() {
        let service = import_service(InMemoryDealRepository::default());
        let incomplete = Some(CreateDeal {
            deal_unique_id: Some("d2".to_string()),
            ..Default::default()
        });

        let report = service.import(vec![create_deal("d1"), None, incomplete, create_deal("d3")]).await;

        assert_eq!(report, ImportReport { imported: 2, skipped: 2 });
        assert!(service.deal_service.get("d2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_abort_batch() {
        let service = import_service(BrokenWritesRepository::default());

        let report = service.import(vec![
            create_deal("d1"),
            create_deal("broken-1"),
            create_deal("d2"),
        ]).await;

        assert_eq!(report, ImportReport { imported: 2, skipped: 1 });
        assert!(service.deal_service.get("d2").await.unwrap().is_some());
        assert!(service.deal_service.get("broken-1").await.unwrap().is_none());
    }
}
