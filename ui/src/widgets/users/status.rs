//! Loading and failure placeholders shown instead of the table.

use egui::{Color32, Response, RichText, Ui};
use userdesk_business::RetryUsersCommand;
use userdesk_states::StateCtx;

pub const LOADING_TEXT: &str = "Fetching your users...";
pub const ERROR_HEADING: &str = "Error Fetching Users";
pub const RETRY_LABEL: &str = "Try Again";
const FALLBACK_ERROR: &str = "An unexpected error occurred while loading users.";

const PLACEHOLDER_PADDING: f32 = 60.0;

pub fn loading_view(ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(PLACEHOLDER_PADDING);
        ui.spinner();
        ui.label(RichText::new(LOADING_TEXT).color(Color32::GRAY));
    })
    .response
}

/// Failure message with a retry button. Retrying queues exactly one [`RetryUsersCommand`].
pub fn error_view(ctx: &mut StateCtx, message: &str, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(PLACEHOLDER_PADDING);
        ui.label(RichText::new("⚠").size(28.0).color(Color32::RED));
        ui.heading(ERROR_HEADING);

        let message = if message.trim().is_empty() {
            FALLBACK_ERROR
        } else {
            message
        };
        ui.label(message);
        ui.add_space(8.0);

        let retry = egui::Button::new(RichText::new(RETRY_LABEL).color(Color32::WHITE))
            .fill(Color32::from_rgb(220, 38, 38));
        if ui.add(retry).clicked() {
            log::info!("retrying users fetch");
            ctx.enqueue_command::<RetryUsersCommand>();
        }
    })
    .response
}

#[cfg(test)]
mod tests {
    use kittest::Queryable;

    use super::*;
    use crate::test_utils::TestCtx;

    #[tokio::test]
    async fn test_loading_view_text() {
        let mut ctx = TestCtx::new(|ui, _state| {
            loading_view(ui);
        })
        .await;

        let harness = ctx.harness_mut();
        harness.step();

        assert!(harness.query_by_label(LOADING_TEXT).is_some());
    }

    #[tokio::test]
    async fn test_error_view_shows_message() {
        let mut ctx = TestCtx::new(|ui, state| {
            error_view(&mut state.ctx, "Database is down", ui);
        })
        .await;

        let harness = ctx.harness_mut();
        harness.step();

        assert!(harness.query_by_label(ERROR_HEADING).is_some());
        assert!(harness.query_by_label("Database is down").is_some());
        assert!(harness.query_by_label(FALLBACK_ERROR).is_none());
    }

    #[tokio::test]
    async fn test_error_view_blank_message_falls_back() {
        let mut ctx = TestCtx::new(|ui, state| {
            error_view(&mut state.ctx, "  ", ui);
        })
        .await;

        let harness = ctx.harness_mut();
        harness.step();

        assert!(harness.query_by_label(FALLBACK_ERROR).is_some());
    }

    #[tokio::test]
    async fn test_try_again_queues_one_retry() {
        let mut ctx = TestCtx::new(|ui, state| {
            error_view(&mut state.ctx, "boom", ui);
        })
        .await;

        let harness = ctx.harness_mut();
        harness.step();
        assert_eq!(harness.state().ctx.pending_commands(), 0);

        harness.get_by_label(RETRY_LABEL).click();
        harness.step();

        assert_eq!(harness.state().ctx.pending_commands(), 1);
    }
}
