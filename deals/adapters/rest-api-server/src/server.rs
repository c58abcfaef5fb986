use std::net::{IpAddr, SocketAddr, TcpListener};
use std::sync::Arc;

use anyhow::Result;
use axum::{Json, Router};
use axum::extract::{Path, State};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::get;
use tracing::info;

use domain_model::CreateDeal;
use deals_core_api::DealsApi;
use deals_rest_api::dto::DealResponse;
use deals_rest_api::endpoints::{DEAL, DEALS};
use deals_rest_api::mapping::to_response;

use crate::errors::{ApiError, BatchViolation};

pub fn router(deals: Arc<dyn DealsApi>) -> Router {
    Router::new()
        .route(DEALS, get(get_deals).post(import_deals))
        .route(DEAL, get(get_deal))
        .with_state(deals)
}

pub async fn run(port: u16, deals: impl DealsApi) -> Result<()> {
    let deals: Arc<dyn DealsApi> = Arc::new(deals);
    let address = SocketAddr::new(IpAddr::from([0, 0, 0, 0]), port);
    info!("Deals api listening on {address}");
    axum::Server::bind(&address)
        .serve(router(deals).into_make_service())
        .await?;
    Ok(())
}

/// Serves on an already bound listener.
pub async fn serve(listener: TcpListener, deals: Arc<dyn DealsApi>) -> Result<()> {
    info!("Deals api listening on {}", listener.local_addr()?);
    axum::Server::from_tcp(listener)?
        .serve(router(deals).into_make_service())
        .await?;
    Ok(())
}

async fn import_deals(
    State(deals): State<Arc<dyn DealsApi>>,
    payload: Result<Json<Vec<Option<CreateDeal>>>, JsonRejection>,
) -> Result<(StatusCode, String), ApiError> {
    let Json(batch) = payload.map_err(body_error)?;
    info!("Received request to import {} deals", batch.len());
    validate_batch(&batch)?;
    let report = deals.import_deals(batch).await?;
    Ok((StatusCode::CREATED, report.to_string()))
}

/// Unparseable JSON is a structural failure of the batch. Other rejections,
/// such as an oversized body, keep their own status.
fn body_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => ApiError::MalformedBody(rejection.body_text()),
        rejection => ApiError::Rejected(rejection.status(), rejection.body_text()),
    }
}

/// Rejects the whole batch if any record breaks a field constraint. Absent
/// records are left to the import, which skips them.
fn validate_batch(batch: &[Option<CreateDeal>]) -> Result<(), ApiError> {
    let mut violations = Vec::new();
    for (index, deal) in batch.iter().enumerate() {
        if let Some(Err(deal_violations)) = deal.as_ref().map(CreateDeal::validate) {
            violations.extend(deal_violations
                .into_iter()
                .map(|violation| BatchViolation { index, violation }));
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(violations))
    }
}

async fn get_deals(State(deals): State<Arc<dyn DealsApi>>) -> Result<Json<Vec<DealResponse>>, ApiError> {
    let result = deals.get_deals()
        .await?
        .into_iter()
        .map(DealResponse::from)
        .collect();
    Ok(Json(result))
}

async fn get_deal(
    State(deals): State<Arc<dyn DealsApi>>,
    Path(deal_unique_id): Path<String>,
) -> Result<Json<DealResponse>, ApiError> {
    let deal = deals.get_deal(&deal_unique_id).await?;
    to_response(deal)
        .map(Json)
        .ok_or(ApiError::NotFound(deal_unique_id))
}
