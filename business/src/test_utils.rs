//! Mock-server harness for the fetch commands.

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::Duration;

use userdesk_states::StateCtx;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{BusinessConfig, UserSelection, users_page_ctx};

pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let ctx = users_page_ctx(
            BusinessConfig::new(mock_server.uri()),
            UserSelection::default(),
        );
        Self { mock_server, ctx }
    }

    /// Spawns queued commands, waits for all of them and applies their updates.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while self.ctx.task_count() > 0 {
            let joined = tokio::time::timeout_at(deadline, self.ctx.task_set_mut().join_next())
                .await
                .expect("timed out waiting for command tasks");
            if joined.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.run_computed();
    }

    pub async fn mock_users(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_users_error(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Number of `GET /api/users` requests the mock server has seen.
    pub async fn users_requests(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == "/api/users")
            .count()
    }
}

pub fn sample_users_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Bob",
            "email": "bob@example.com",
            "status": "active",
            "address": "1 Main St",
            "joined_at": "2023-01-15T00:00:00Z",
            "notes": "First customer"
        },
        {
            "id": 2,
            "name": "Amy",
            "email": "amy@example.com",
            "status": "inactive",
            "address": "2 Side St",
            "joined_at": "2023-02-20T00:00:00Z",
            "notes": ""
        }
    ])
}
