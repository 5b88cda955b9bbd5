use egui::{Color32, Response, Ui};
use userdesk_utils::version_info::{self, RuntimeEnv};

/// Displays the current environment and version/info in the UI.
///
/// Display format varies by environment:
/// - Prod (stable): `stable:{version}`
/// - Nightly: `nightly:{date}`
/// - Test: `main:{commit}`
pub fn env_version(ui: &mut Ui) -> Response {
    let color = match RuntimeEnv::from_features() {
        RuntimeEnv::Prod => Color32::GREEN,
        RuntimeEnv::Nightly => Color32::from_rgb(255, 165, 0), // Orange
        RuntimeEnv::Test | RuntimeEnv::Local => Color32::from_rgb(200, 200, 200),
    };

    ui.colored_label(color, version_info::format_env_version())
}
