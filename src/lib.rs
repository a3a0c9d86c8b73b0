pub mod catalog;
pub mod checkout;
pub mod client;
pub mod config;
pub mod cors;
pub mod error;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod types;
pub mod widget;

pub use checkout::{simulate_checkout, CheckoutResponse, RandomSource};
pub use client::{CheckoutClient, CheckoutTransport};
pub use config::SiteConfig;
pub use error::CheckoutError;
pub use widget::{Activation, CheckoutWidget, WidgetState};
