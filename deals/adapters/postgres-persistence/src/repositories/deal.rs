use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, QueryTrait, sea_query};

use deals_persistence_api::{DealRepository, InsertOutcome};

use crate::entities::*;
use crate::entities::prelude::Deal;

pub struct DealPostgresRepository<T: ConnectionTrait> {
    db: Arc<T>,
}

impl<T: ConnectionTrait> DealPostgresRepository<T> {
    pub fn new(db: Arc<T>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<T: ConnectionTrait + Send + Sync + 'static> DealRepository for DealPostgresRepository<T> {
    async fn exists(&self, deal_unique_id: &str) -> Result<bool> {
        let count = Deal::find_by_id(deal_unique_id.to_string())
            .count(self.db.deref())
            .await?;
        Ok(count > 0)
    }

    async fn insert(&self, deal: domain_model::Deal) -> Result<InsertOutcome> {
        let model = deal::ActiveModel {
            deal_unique_id: ActiveValue::Set(deal.deal_unique_id.clone()),
            ordering_currency: ActiveValue::Set(deal.ordering_currency.clone()),
            to_currency: ActiveValue::Set(deal.to_currency.clone()),
            deal_timestamp: ActiveValue::Set(deal.deal_timestamp),
            amount: ActiveValue::Set(deal.amount),
        };
        // a single statement, so every record commits on its own
        let statement = Deal::insert(model)
            .on_conflict(
                sea_query::OnConflict::column(deal::Column::DealUniqueId)
                    .do_nothing()
                    .to_owned(),
            )
            .build(self.db.get_database_backend());
        let result = self.db.execute(statement).await?;
        if result.rows_affected() == 0 {
            Ok(InsertOutcome::Duplicate)
        } else {
            Ok(InsertOutcome::Inserted(deal))
        }
    }

    async fn get(&self, deal_unique_id: &str) -> Result<Option<domain_model::Deal>> {
        let result = Deal::find_by_id(deal_unique_id.to_string())
            .one(self.db.deref())
            .await?
            .map(domain_model::Deal::from);
        Ok(result)
    }

    async fn get_all(&self) -> Result<Vec<domain_model::Deal>> {
        let result = Deal::find()
            .order_by_asc(deal::Column::DealTimestamp)
            .order_by_asc(deal::Column::DealUniqueId)
            .all(self.db.deref())
            .await?
            .into_iter()
            .map(domain_model::Deal::from)
            .collect();
        Ok(result)
    }
}

impl From<deal::Model> for domain_model::Deal {
    fn from(model: deal::Model) -> Self {
        Self {
            deal_unique_id: model.deal_unique_id,
            ordering_currency: model.ordering_currency,
            to_currency: model.to_currency,
            deal_timestamp: model.deal_timestamp,
            amount: model.amount,
        }
    }
}
