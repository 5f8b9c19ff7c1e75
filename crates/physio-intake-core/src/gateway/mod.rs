//! HTTP gateway for the spreadsheet backend.
//!
//! One configured web-app endpoint multiplexes three logical operations
//! through an `action` discriminator:
//!
//! 1. Read: `GET <endpoint>?action=getAll` -> `{success, records?, error?}`
//! 2. Add: `POST {action: "add", data}` -> `{success, sno?, error?}`
//! 3. Update: `POST {action: "update", sno, data}` -> `{success, error?}`
//!
//! Requests carry no timeout: a submit stays in flight until the
//! transport resolves or errors.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::config::Endpoint;
use crate::models::{PatientInput, PatientRecord};

/// Gateway errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("remote endpoint is not configured")]
    Unconfigured,

    #[error("remote request failed: {0}")]
    Remote(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Backend response to `action=getAll`.
#[derive(Debug, Clone, Deserialize)]
struct FetchResponse {
    success: bool,
    #[serde(default)]
    records: Option<Vec<PatientRecord>>,
    #[serde(default)]
    error: Option<String>,
}

/// Write request body for `add` and `update`.
#[derive(Debug, Serialize)]
struct WriteRequest<'a> {
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sno: Option<u32>,
    data: &'a PatientInput,
}

/// Backend response to a write.
#[derive(Debug, Clone, Deserialize)]
struct WriteResponse {
    success: bool,
    #[serde(default)]
    sno: Option<u32>,
    #[serde(default)]
    error: Option<String>,
}

/// Outcome of a write the backend accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAck {
    /// The backend confirmed the write and echoed the assigned serial.
    Assigned(u32),
    /// The backend reported success without a readable serial; the true
    /// state must be observed with a fresh fetch.
    Unconfirmed,
}

/// Client for the backend endpoint.
pub struct RemoteGateway {
    endpoint: Endpoint,
    client: Client,
}

impl RemoteGateway {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_configured()
    }

    /// Fetch the full record collection.
    pub fn fetch_all(&self) -> GatewayResult<Vec<PatientRecord>> {
        let mut url = self.base()?.clone();
        url.query_pairs_mut().append_pair("action", "getAll");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?;

        let body: FetchResponse = response.json().map_err(remote)?;
        if !body.success {
            return Err(GatewayError::Remote(
                body.error.unwrap_or_else(|| "backend reported failure".into()),
            ));
        }

        Ok(body.records.unwrap_or_default())
    }

    /// Submit a new record; the backend assigns the serial.
    pub fn add(&self, data: &PatientInput) -> GatewayResult<WriteAck> {
        let body = self.post(&WriteRequest {
            action: "add",
            sno: None,
            data,
        })?;

        Ok(match body.sno {
            Some(sno) => WriteAck::Assigned(sno),
            None => WriteAck::Unconfirmed,
        })
    }

    /// Replace every field of the record with the given serial.
    pub fn update(&self, sno: u32, data: &PatientInput) -> GatewayResult<()> {
        self.post(&WriteRequest {
            action: "update",
            sno: Some(sno),
            data,
        })?;
        Ok(())
    }

    fn base(&self) -> GatewayResult<&Url> {
        match &self.endpoint {
            Endpoint::Configured(url) => Ok(url),
            Endpoint::Unconfigured => Err(GatewayError::Unconfigured),
        }
    }

    fn post(&self, request: &WriteRequest<'_>) -> GatewayResult<WriteResponse> {
        let url = self.base()?.clone();

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?;

        let body: WriteResponse = response.json().map_err(remote)?;
        if !body.success {
            return Err(GatewayError::Remote(
                body.error.unwrap_or_else(|| "backend rejected the write".into()),
            ));
        }

        Ok(body)
    }
}

fn remote(err: reqwest::Error) -> GatewayError {
    GatewayError::Remote(err.to_string())
}
