//! IRIS request and response types
//!
//! Field names follow the IRIS wire format exactly.

use serde::{Deserialize, Serialize};

use crate::serde_utils::{error_list, null_default};

/// Bank a payout can be sent to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeneficiaryBank {
    /// Bank code used in beneficiary and payout requests (e.g. `bca`)
    #[serde(deserialize_with = "null_default::deserialize")]
    pub code: String,
    /// Display name
    #[serde(deserialize_with = "null_default::deserialize")]
    pub name: String,
}

/// Response of the beneficiary bank listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeneficiaryBanksResponse {
    /// Supported banks
    #[serde(deserialize_with = "null_default::deserialize")]
    pub beneficiary_banks: Vec<BeneficiaryBank>,
    /// Status code echoed by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
}

/// Registered payout recipient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Beneficiary {
    /// Account holder name
    #[serde(deserialize_with = "null_default::deserialize")]
    pub name: String,
    /// Account number
    #[serde(deserialize_with = "null_default::deserialize")]
    pub account: String,
    /// Bank code, see [`BeneficiaryBank::code`]
    #[serde(deserialize_with = "null_default::deserialize")]
    pub bank: String,
    /// Unique alias, also the key for updates
    #[serde(deserialize_with = "null_default::deserialize")]
    pub alias_name: String,
    /// Notification email
    #[serde(deserialize_with = "null_default::deserialize")]
    pub email: String,
}

/// Response of beneficiary creation and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeneficiariesResponse {
    /// `created` or `updated` on success
    #[serde(deserialize_with = "null_default::deserialize")]
    pub status: String,
    /// Status code echoed by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    /// Rejection reasons
    #[serde(deserialize_with = "error_list::deserialize")]
    pub errors: Vec<String>,
    /// Summary of the rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One disbursement instruction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutInstruction {
    /// Account holder name
    pub beneficiary_name: String,
    /// Account number
    pub beneficiary_account: String,
    /// Bank code
    pub beneficiary_bank: String,
    /// Notification email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_email: Option<String>,
    /// Amount as a decimal string, e.g. `"100000.00"`
    pub amount: String,
    /// Free text shown on the transfer
    pub notes: String,
}

/// Payouts submitted together in one creation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayoutRequest {
    /// Instructions, at least one
    pub payouts: Vec<PayoutInstruction>,
}

/// Outcome of a single created payout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutResult {
    /// Payout status, `queued` right after creation
    #[serde(deserialize_with = "null_default::deserialize")]
    pub status: String,
    /// Reference used to approve the payout
    #[serde(deserialize_with = "null_default::deserialize")]
    pub reference_no: String,
}

/// Response of payout creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePayoutResponse {
    /// Per instruction outcome, in request order
    #[serde(deserialize_with = "null_default::deserialize")]
    pub payouts: Vec<PayoutResult>,
    /// Set when the whole request was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Per instruction rejection details, shape varies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl CreatePayoutResponse {
    /// Rejection message, if the API reported one
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|msg| !msg.is_empty())
    }
}

/// Payouts to approve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovePayoutRequest {
    /// References returned by payout creation
    pub reference_nos: Vec<String>,
    /// One time password of the approver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Response of payout approval
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovePayoutResponse {
    /// `ok` on success
    #[serde(deserialize_with = "null_default::deserialize")]
    pub status: String,
    /// Rejection reasons
    #[serde(deserialize_with = "error_list::deserialize")]
    pub errors: Vec<String>,
    /// Summary of the rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
