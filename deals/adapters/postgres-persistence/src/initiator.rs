use std::ops::Deref;
use std::sync::Arc;

use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::migrations::Migrator;

/// Connects to `{url}/{db_name}`, creating the database on first start, and
/// brings its schema up to date.
pub async fn init_db(url: &str, db_name: &str) -> Result<Arc<DatabaseConnection>> {
    let db = Database::connect(format!("{}/postgres", &url))
        .await
        .context(" ▸ deals: Error during connecting to database")?;
    let _ = db
        .execute_unprepared(&format!("CREATE DATABASE {};", db_name))
        .await
        .map_err(|err| match err {
            DbErr::Exec(err) => warn!("{}", err),
            err => error!("{}", err),
        });

    let db = Arc::new(
        Database::connect(format!("{}/{}", url, db_name))
            .await
            .with_context(|| format!(" ▸ deals: Error during connecting to '{db_name}' database"))?,
    );
    Migrator::up(db.deref(), None)
        .await
        .context(" ▸ deals: Failed apply db migrations")?;
    info!("Database '{db_name}' is ready");
    Ok(db)
}
