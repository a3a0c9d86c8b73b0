use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Checkout failed with HTTP status {0}")]
    Status(u16),
    #[error("Invalid checkout API url: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
