use retailers::errors::{RetailerError, SessionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ShopperError {
    #[error("Input closed")]
    InputClosed,
    #[error("Gave up after {0} invalid answers")]
    TooManyAttempts(u32),
    #[error("Failed to use the terminal: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("Failed to fetch stores: {0}")]
    Retailer(#[from] RetailerError),
    #[error("{0}")]
    Session(#[from] SessionError),
}
