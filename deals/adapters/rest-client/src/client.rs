use reqwest::{Client, Response, StatusCode, Url};
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use deals_rest_api::dto::{DealResponse, ErrorResponse};
use deals_rest_api::endpoints::DEALS;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request rejected with {status}: {}", .body.message)]
    Rejected { status: StatusCode, body: ErrorResponse },
    #[error("Unexpected response {status}: {body}")]
    Unexpected { status: StatusCode, body: String },
    #[error("Invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct DealsRestClient {
    url: String,
    client: Client,
}

impl DealsRestClient {
    pub fn new(url: &str) -> Self {
        let mut url = String::from(url.trim_end_matches('/'));
        if !url.starts_with("http") {
            url = format!("http://{url}");
        }
        Self {
            url,
            client: Client::new(),
        }
    }

    /// Posts a batch and returns the import summary text.
    pub async fn import_deals<T: Serialize + ?Sized>(&self, deals: &T) -> Result<String, ClientError> {
        let url = self.deals_url()?;
        trace!("Request url: {url:?}");
        let response = self.client.post(url)
            .json(deals)
            .send()
            .await?;
        if response.status() == StatusCode::CREATED {
            Ok(response.text().await?)
        } else {
            Err(error_from(response).await)
        }
    }

    pub async fn get_deals(&self) -> Result<Vec<DealResponse>, ClientError> {
        let url = self.deals_url()?;
        trace!("Request url: {url:?}");
        let response = self.client.get(url)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(error_from(response).await)
        }
    }

    pub async fn get_deal(&self, deal_unique_id: &str) -> Result<Option<DealResponse>, ClientError> {
        let mut url = self.deals_url()?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(deal_unique_id);
        }
        trace!("Request url: {url:?}");
        let response = self.client.get(url)
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            _ => Err(error_from(response).await),
        }
    }

    fn deals_url(&self) -> Result<Url, ClientError> {
        Ok(Url::parse(&format!("{}{}", self.url, DEALS))?)
    }
}

async fn error_from(response: Response) -> ClientError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return ClientError::Transport(err),
    };
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(body) if status.is_client_error() => ClientError::Rejected { status, body },
        _ => ClientError::Unexpected { status, body },
    }
}
