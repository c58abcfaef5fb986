use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

use domain_model::{CreateDeal, Deal};

#[async_trait]
pub trait DealsApi: Send + Sync + 'static {
    /// Imports a structurally valid batch record by record. A record that
    /// cannot be mapped or stored is skipped and never aborts the batch.
    async fn import_deals(&self, deals: Vec<Option<CreateDeal>>) -> Result<ImportReport>;
    async fn get_deals(&self) -> Result<Vec<Deal>>;
    async fn get_deal(&self, deal_unique_id: &str) -> Result<Option<Deal>>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: u64,
    pub skipped: u64,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Imported {} deals. Skipped {} duplicates/errors.", self.imported, self.skipped)
    }
}
