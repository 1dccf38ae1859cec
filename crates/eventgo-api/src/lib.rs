// eventgo-api: Async Rust client for the EventGo storefront events service

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::StorefrontClient;
pub use error::Error;
pub use transport::TransportConfig;
