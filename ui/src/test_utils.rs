//! Harness helpers for widget tests inside this crate.

use egui_kittest::Harness;
use userdesk_business::{ListUsersCompute, ListUsersResult, UserRecord};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::state::State;

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    pub async fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        Self::with_search(app, "").await
    }

    /// Starts with `search` as the page query string.
    pub async fn with_search(app: impl FnMut(&mut egui::Ui, &mut State) + 'a, search: &str) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let state = State::test_with_search(mock_server.uri(), search);
        let harness = Harness::new_ui_state(app, state);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }
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

pub fn sample_users() -> Vec<UserRecord> {
    serde_json::from_value(sample_users_json()).expect("sample users should decode")
}

/// Publishes `users` as a finished fetch and recomputes the table view.
pub fn load_users(state: &mut State, users: Vec<UserRecord>) {
    state.ctx.updater().set(ListUsersCompute {
        result: ListUsersResult::Loaded(users),
    });
    state.ctx.run_computed();
}
