//! Calls against the users API. Used by commands only; nothing here touches state.

use serde::Deserialize;
use thiserror::Error;

use crate::http::Client;
use crate::user::UserRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response. `message` is the server's `error` field when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse users response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("API returned status: {status}"));
        Self::Status { status, message }
    }
}

/// `GET {api_url}/users`
pub async fn list_users(api_url: &str) -> Result<Vec<UserRecord>, ApiError> {
    let url = format!("{api_url}/users");
    log::debug!("list_users: GET {url}");

    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.body));
    }

    response
        .json()
        .map_err(|err| ApiError::Decode(err.to_string()))
}
