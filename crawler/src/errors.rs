use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlerError {
    #[error("Session client general error: {0}")]
    SessionClientGeneralError(#[from] reqwest::Error),
    #[error("Session client failed to create header")]
    SessionClientInvalidHeader,
}

impl From<InvalidHeaderName> for CrawlerError {
    fn from(_err: InvalidHeaderName) -> Self {
        Self::SessionClientInvalidHeader
    }
}

impl From<InvalidHeaderValue> for CrawlerError {
    fn from(_err: InvalidHeaderValue) -> Self {
        Self::SessionClientInvalidHeader
    }
}
