//! HTTP transport for the IRIS payout API
//!
//! This crate owns everything below the payout domain: resolving the
//! environment-specific base URL, API-key authentication, and sending JSON
//! over reqwest. Consumers depend on the [`Transport`] trait so the transport
//! can be swapped or stubbed.
//!
//! # Example
//!
//! ```no_run
//! use iris_http_client::{Environment, HttpClient, Method, Transport};
//!
//! async fn example() -> iris_http_client::Response<Vec<u8>> {
//!     let client = HttpClient::builder()
//!         .environment(Environment::Sandbox)
//!         .api_key("IRIS-creator-key")
//!         .build()?;
//!     let url = format!("{}/api/v1/beneficiary_banks", client.iris_url());
//!     client.call(Method::Get, &url, None).await
//! }
//! ```

mod client;
mod environment;
mod error;
mod response;
mod transport;

pub use client::{HttpClient, HttpClientBuilder};
pub use environment::Environment;
pub use error::HttpError;
pub use response::Response;
pub use transport::{Method, Transport};
