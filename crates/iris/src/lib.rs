//! Client for the Midtrans IRIS payout API
//!
//! [`IrisGateway`] exposes the IRIS operations: listing beneficiary banks,
//! managing beneficiaries, creating payouts and approving them. Transport is
//! delegated to any [`Transport`](iris_http_client::Transport), normally an
//! [`HttpClient`](iris_http_client::HttpClient).
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use iris::IrisGateway;
//! use iris_http_client::{Environment, HttpClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::builder()
//!     .environment(Environment::Sandbox)
//!     .api_key("IRIS-creator-key")
//!     .build()?;
//! let gateway = IrisGateway::new(Arc::new(client));
//!
//! for bank in gateway.get_list_beneficiary_bank().await?.beneficiary_banks {
//!     println!("{} {}", bank.code, bank.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gateway;
mod serde_utils;
pub mod types;

pub use error::{Error, Result};
pub use gateway::IrisGateway;
pub use types::{
    ApprovePayoutRequest, ApprovePayoutResponse, BeneficiariesResponse, Beneficiary,
    BeneficiaryBank, BeneficiaryBanksResponse, CreatePayoutRequest, CreatePayoutResponse,
    PayoutInstruction, PayoutResult,
};
