//! HTTP client whose futures are `Send` on every target.
//!
//! Commands must return `Send` futures, but on wasm32 `reqwest::Response` wraps JS values and is
//! not `Send`. There the request runs on the JS thread via `wasm_bindgen_futures::spawn_local` and
//! the finished [`Response`] comes back through a `flume` channel. Native builds call `reqwest`
//! directly.

use std::collections::HashMap;

use thiserror::Error;

/// Status and body of a finished request. Only owned data, so it is `Send`.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(String),
    #[cfg(target_arch = "wasm32")]
    #[error("request was dropped before it completed")]
    Cancelled,
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(self).await;
                if tx.send_async(result).await.is_err() {
                    log::debug!("http: receiver dropped before the response arrived");
                }
            });
            rx.recv_async().await.map_err(|_| HttpError::Cancelled)?
        }
    }
}

async fn execute(request: RequestBuilder) -> HttpResult<Response> {
    let transport = |err: reqwest::Error| HttpError::Transport(err.to_string());

    let mut builder = reqwest::Client::new().get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let response = builder.send().await.map_err(transport)?;

    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(transport)?.to_vec();

    Ok(Response { status, body })
}

pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder {
            url: url.into(),
            headers: HashMap::new(),
        }
    }
}
