use crate::checkout::CheckoutResponse;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use dotenvy::dotenv;
use log::{debug, warn};
use reqwest::Url;
use std::env as stdenv;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8081";

/// Anything able to run one checkout call for the widget.
#[async_trait]
pub trait CheckoutTransport: Send + Sync {
    async fn checkout(&self, product_id: &str) -> Result<CheckoutResponse>;
}

/// HTTP transport talking to `POST {api_url}/api/checkout/{id}`.
#[derive(Clone, Debug)]
pub struct CheckoutClient {
    pub api_url: String,
    http: reqwest::Client,
}

impl CheckoutClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Reads `PIGEONHOLE_API_URL` (after loading `.env`), falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        dotenv().ok();
        let api_url = stdenv::var("PIGEONHOLE_API_URL").unwrap_or_else(|_| {
            debug!("PIGEONHOLE_API_URL not set, using {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        });
        Self::new(api_url)
    }

    /// The product id becomes a single percent-encoded path segment.
    pub fn endpoint(&self, product_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| CheckoutError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CheckoutError::InvalidUrl(self.api_url.clone()))?;
            segments
                .pop_if_empty()
                .extend(&["api", "checkout", product_id]);
        }
        Ok(url)
    }
}

impl Default for CheckoutClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl CheckoutTransport for CheckoutClient {
    async fn checkout(&self, product_id: &str) -> Result<CheckoutResponse> {
        let url = self.endpoint(product_id)?;
        debug!("POST {}", url);
        let response = self.http.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("checkout for {:?} answered {}", product_id, status);
            return Err(CheckoutError::Status(status.as_u16()));
        }
        let json = response.json::<CheckoutResponse>().await?;
        Ok(json)
    }
}
