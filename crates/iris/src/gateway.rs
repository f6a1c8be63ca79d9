//! IRIS gateway

use std::sync::Arc;

use iris_http_client::{HttpError, Method, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{
    ApprovePayoutRequest, ApprovePayoutResponse, BeneficiariesResponse, Beneficiary,
    BeneficiaryBanksResponse, CreatePayoutRequest, CreatePayoutResponse,
};

const BENEFICIARY_BANKS_PATH: &str = "api/v1/beneficiary_banks";
const BENEFICIARIES_PATH: &str = "api/v1/beneficiaries";
const PAYOUTS_PATH: &str = "api/v1/payouts";
const APPROVE_PAYOUTS_PATH: &str = "api/v1/payouts/approve";

const STATUS_CREATED: &str = "created";
const STATUS_UPDATED: &str = "updated";
const STATUS_OK: &str = "ok";

const APPROVAL_NOT_OK: &str = "Error approving payouts, status from API not OK";

/// Gateway to the IRIS payout API
///
/// Holds nothing but the transport, so one instance can be cloned or shared
/// freely between tasks.
#[derive(Debug, Clone)]
pub struct IrisGateway {
    client: Arc<dyn Transport>,
}

impl IrisGateway {
    /// Create new [`IrisGateway`]
    pub fn new(client: Arc<dyn Transport>) -> Self {
        Self { client }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.client.iris_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Send a request to an IRIS path and decode the JSON response
    ///
    /// `path` is relative to the IRIS base URL, with or without a leading `/`.
    /// `body` is an already encoded JSON document.
    pub async fn dispatch<R>(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.client.call(method, &url, body).await?;

        serde_json::from_slice(&response).map_err(|err| {
            tracing::warn!("Http Response error: {}", err);
            Error::Transport(HttpError::from(err))
        })
    }

    /// List the banks payouts can be sent to
    #[instrument(skip(self))]
    pub async fn get_list_beneficiary_bank(&self) -> Result<BeneficiaryBanksResponse> {
        self.dispatch(Method::Get, BENEFICIARY_BANKS_PATH, None)
            .await
            .inspect_err(|err| tracing::error!("Error getting beneficiary banks: {}", err))
    }

    /// Register a beneficiary
    #[instrument(skip_all, fields(alias_name = %request.alias_name))]
    pub async fn create_beneficiaries(&self, request: &Beneficiary) -> Result<()> {
        self.send_beneficiary(Method::Post, BENEFICIARIES_PATH, request, STATUS_CREATED)
            .await
            .inspect_err(|err| tracing::error!("Error creating beneficiaries: {}", err))
    }

    /// Update the beneficiary registered under `alias_name`
    ///
    /// The alias is placed in the path as given; percent-encoding is left to
    /// the transport's URL handling.
    #[instrument(skip(self, request))]
    pub async fn update_beneficiaries(&self, alias_name: &str, request: &Beneficiary) -> Result<()> {
        let path = format!("{}/{}", BENEFICIARIES_PATH, alias_name);
        self.send_beneficiary(Method::Patch, &path, request, STATUS_UPDATED)
            .await
            .inspect_err(|err| tracing::error!("Error updating beneficiaries: {}", err))
    }

    /// List registered beneficiaries
    #[instrument(skip(self))]
    pub async fn get_list_beneficiaries(&self) -> Result<Vec<Beneficiary>> {
        self.dispatch(Method::Get, BENEFICIARIES_PATH, None)
            .await
            .inspect_err(|err| tracing::error!("Error get list beneficiaries: {}", err))
    }

    /// Create one or more payouts
    ///
    /// Per payout outcomes are left to the caller. Only a request-wide
    /// `error_message` is turned into an error.
    #[instrument(skip_all, fields(payouts = request.payouts.len()))]
    pub async fn create_payouts(&self, request: &CreatePayoutRequest) -> Result<CreatePayoutResponse> {
        self.send_payouts(request)
            .await
            .inspect_err(|err| tracing::error!("Error creating payouts: {}", err))
    }

    /// Approve payouts by reference number
    #[instrument(skip_all, fields(payouts = request.reference_nos.len()))]
    pub async fn approve_payouts(
        &self,
        request: &ApprovePayoutRequest,
    ) -> Result<ApprovePayoutResponse> {
        self.send_approval(request)
            .await
            .inspect_err(|err| tracing::error!("Error approving payouts: {}", err))
    }

    async fn send_beneficiary(
        &self,
        method: Method,
        path: &str,
        request: &Beneficiary,
        expected_status: &str,
    ) -> Result<()> {
        let body = encode(request)?;
        let response: BeneficiariesResponse = self.dispatch(method, path, Some(body)).await?;

        if response.status == expected_status {
            return Ok(());
        }

        Err(Error::Domain(beneficiary_rejection(&response)))
    }

    async fn send_payouts(&self, request: &CreatePayoutRequest) -> Result<CreatePayoutResponse> {
        let body = encode(request)?;
        let response: CreatePayoutResponse =
            self.dispatch(Method::Post, PAYOUTS_PATH, Some(body)).await?;

        if let Some(message) = response.error_message() {
            return Err(Error::Domain(message.to_string()));
        }

        Ok(response)
    }

    async fn send_approval(&self, request: &ApprovePayoutRequest) -> Result<ApprovePayoutResponse> {
        let body = encode(request)?;
        let response: ApprovePayoutResponse = self
            .dispatch(Method::Post, APPROVE_PAYOUTS_PATH, Some(body))
            .await?;

        // Item errors win over the aggregate status
        if !response.errors.is_empty() {
            return Err(Error::Domain(response.errors.join(", ")));
        }

        if response.status != STATUS_OK {
            return Err(Error::Domain(APPROVAL_NOT_OK.to_string()));
        }

        Ok(response)
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(Error::Serialization)
}

fn beneficiary_rejection(response: &BeneficiariesResponse) -> String {
    if !response.errors.is_empty() {
        return response.errors.join(",");
    }

    match response.error_message.as_deref() {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("unexpected status \"{}\"", response.status),
    }
}
