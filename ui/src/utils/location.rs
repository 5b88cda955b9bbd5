//! [`Location`] backed by `window.location` and `window.history`.

use userdesk_business::Location;
use wasm_bindgen::JsValue;

/// The browser address bar. Holds no state; every call reads the live window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| search.trim_start_matches('?').to_owned())
            .unwrap_or_default()
    }

    fn replace_search(&mut self, search: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("replace_search: no window");
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let url = if search.is_empty() {
            format!("{path}{hash}")
        } else {
            format!("{path}?{search}{hash}")
        };

        let result = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = result {
            log::warn!("replace_search: history.replaceState failed: {err:?}");
        }
    }
}
