use common::result::enums::RetailerName;
use crawler::errors::CrawlerError;
use thiserror::Error;

/// Anything that went wrong talking to a retailer
#[derive(Error, Debug)]
pub enum RetailerError {
    #[error("Failed to make API call: {0}")]
    CrawlerFailed(#[from] CrawlerError),
    #[error("Retailer responded with HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },
    #[error("Failed to parse number: {0}")]
    InvalidNumber(String),
    #[error("API request is missing key in JSON response: {0}")]
    ApiResponseMissingKey(String),
    #[error("Failed to deserialize JSON response: {0}")]
    InvalidApiResponse(#[from] serde_json::Error),
    #[error("Store {store_id} belongs to {store_retailer}, not {retailer}")]
    WrongRetailer {
        store_id: String,
        store_retailer: RetailerName,
        retailer: RetailerName,
    },
    #[error("Pages start at 1, got page {0}")]
    InvalidPage(u64),
    #[error("Retailer returned page {page} of a search with only {total_pages} pages")]
    PageOutOfRange { page: u64, total_pages: u64 },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Cannot {action} while {state}")]
    InvalidTransition { action: &'static str, state: String },
    #[error("Retailer request failed: {0}")]
    Upstream(#[from] RetailerError),
}

impl SessionError {
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, SessionError::InvalidTransition { .. })
    }
}
