// SPDX-License-Identifier: MPL-2.0
//! Submission of the contact form to the hosted form-processing endpoint.
//!
//! One multipart request per submission, `Accept: application/json`, no
//! retries and no backoff. A non-success response carries the service's
//! JSON error payload back to the caller for logging.

use crate::config::Endpoint;
use std::fmt;

/// Field contents captured at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<String>,
    pub message: String,
}

/// Errors distinguishable by the app (the user sees the same banner for
/// both; the log detail differs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status.
    Rejected { status: u16, detail: String },
    /// The request never completed (DNS, TLS, connection loss, ...).
    Transport(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected { status, detail } => {
                write!(f, "submission rejected (HTTP {status}): {detail}")
            }
            SubmitError::Transport(msg) => write!(f, "submission failed: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Sends the payload to the endpoint using its configured method.
pub async fn send(endpoint: Endpoint, payload: Payload) -> Result<(), SubmitError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("HeatProProfile/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let mut form = reqwest::multipart::Form::new()
        .text("name", payload.name)
        .text("email", payload.email)
        .text("phone", payload.phone)
        .text("message", payload.message);
    if let Some(service) = payload.service {
        form = form.text("service", service);
    }

    let response = client
        .request(endpoint.method, endpoint.url)
        .multipart(form)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let detail = match response.json::<serde_json::Value>().await {
        Ok(body) => body.to_string(),
        Err(e) => format!("unreadable error payload: {e}"),
    };

    Err(SubmitError::Rejected {
        status: status.as_u16(),
        detail,
    })
}
