use userdesk_business::{BusinessConfig, MemoryLocation, UserSelection, users_page_ctx};
use userdesk_states::StateCtx;

use crate::widgets::UserDetailState;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    /// Transient state of the detail modal (copy feedback).
    pub detail: UserDetailState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            ctx: users_page_ctx(default_config(), default_selection()),
            detail: UserDetailState::default(),
        }
    }
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self::test_with_search(base_url, "")
    }

    /// Like [`State::test`], starting from the query string `search`.
    pub fn test_with_search(base_url: String, search: &str) -> Self {
        Self {
            ctx: users_page_ctx(
                BusinessConfig::new(base_url),
                UserSelection::new(MemoryLocation::new(search)),
            ),
            detail: UserDetailState::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_config() -> BusinessConfig {
    BusinessConfig::default()
}

/// The page origin, so requests stay same-origin.
#[cfg(target_arch = "wasm32")]
fn default_config() -> BusinessConfig {
    match web_sys::window().and_then(|window| window.location().origin().ok()) {
        Some(origin) => BusinessConfig::new(origin),
        None => {
            log::warn!("no window origin, falling back to the default API base");
            BusinessConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_selection() -> UserSelection {
    UserSelection::default()
}

#[cfg(target_arch = "wasm32")]
fn default_selection() -> UserSelection {
    UserSelection::new(crate::utils::location::BrowserLocation)
}
