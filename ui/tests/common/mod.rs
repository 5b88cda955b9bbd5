#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use userdesk_business::ListUsersCompute;
use userdesk_ui::UserdeskApp;
use userdesk_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

pub const NETWORK_POLL_MS: u64 = 50;
pub const MAX_NETWORK_POLLS: usize = 40;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, UserdeskApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserdeskApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, UserdeskApp> {
        &self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// App whose `/api/users` answers with the sample users, expected `times` times.
    pub async fn new_app(times: Times) -> Self {
        Self::new_app_with(ResponseTemplate::new(200).set_body_json(sample_users_json()), times, "")
            .await
    }

    pub async fn new_app_with_search(search: &str) -> Self {
        Self::new_app_with(
            ResponseTemplate::new(200).set_body_json(sample_users_json()),
            1.into(),
            search,
        )
        .await
    }

    pub async fn new_app_with(
        response: ResponseTemplate,
        times: Times,
        search: &str,
    ) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(response)
            .expect(times)
            .mount(&mock_server)
            .await;

        let state = State::test_with_search(mock_server.uri(), search);
        let app = UserdeskApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Steps the app until the users fetch is no longer pending.
pub async fn wait_for_users(harness: &mut Harness<'_, UserdeskApp>) {
    harness.step();
    for _ in 0..MAX_NETWORK_POLLS {
        tokio::time::sleep(Duration::from_millis(NETWORK_POLL_MS)).await;
        harness.step();

        let list = harness.state().state().ctx.compute::<ListUsersCompute>();
        if !list.is_idle() && !list.is_loading() {
            break;
        }
    }
    // Settle windows that opened on the last frame
    harness.step();
}

pub fn sample_users_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Bob Smith",
            "email": "bob.smith@example.com",
            "status": "active",
            "address": "12 Harbor Road, Portland",
            "joined_at": "2023-01-15T09:30:00Z",
            "notes": "Prefers email contact."
        },
        {
            "id": 2,
            "name": "Amy Lee",
            "email": "amy.lee@example.com",
            "status": "inactive",
            "address": "48 Elm Street, Austin",
            "joined_at": "2023-03-04T16:00:00Z",
            "notes": "Paused her plan."
        },
        {
            "id": 3,
            "name": "Cara Jones",
            "email": "cara.jones@example.com",
            "status": "active",
            "address": "7 Lake View, Denver",
            "joined_at": "2024-07-21T11:15:00Z",
            "notes": ""
        }
    ])
}
