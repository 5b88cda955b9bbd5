use std::any::Any;

use userdesk_states::{State, state_assign_impl};
use ustr::Ustr;

const LOCAL_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Where the users API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Base URL of the API routes. An empty base means same origin.
    pub fn api_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{base}/api"))
        }
    }
}

impl Default for BusinessConfig {
    /// Same origin on the web. Native builds use `USERDESK_API_BASE_URL` from build time,
    /// falling back to a locally running service.
    fn default() -> Self {
        let base = if cfg!(target_arch = "wasm32") {
            ""
        } else {
            option_env!("USERDESK_API_BASE_URL").unwrap_or(LOCAL_API_BASE_URL)
        };
        Self::new(base)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
