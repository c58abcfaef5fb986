use anyhow::Result;
use tracing::info;

use deals_config::CONFIG;
use deals_core::Deals;
use deals_postgres_persistence::{init_db, DealPostgresRepository};

pub async fn run() -> Result<()> {
    info!("+ deals running...");
    let db = init_db(&CONFIG.database.url, &CONFIG.application.name).await?;
    let deals = Deals::new(DealPostgresRepository::new(db));
    deals_rest_api_server::run(CONFIG.application.port, deals).await
}
