//! Detail modal for the selected user.

use egui::{Align2, Color32, Id, Response, RichText, Ui, Window};
use userdesk_business::{ListUsersCompute, UserRecord, UserSelection};
use userdesk_states::StateCtx;

use crate::utils::clipboard::copy_text;

pub const COPY_EMAIL_LABEL: &str = "📋";
pub const COPIED_TEXT: &str = "Email copied!";
pub const CLOSE_LABEL: &str = "Close";

const MODAL_WIDTH: f32 = 360.0;

/// Per-modal UI state that does not belong in the business layer.
#[derive(Debug, Default)]
pub struct UserDetailState {
    /// User whose email was copied while the modal has been open.
    copied_for: Option<u64>,
}

impl UserDetailState {
    pub fn copied(&self, id: u64) -> bool {
        self.copied_for == Some(id)
    }

    fn reset(&mut self) {
        self.copied_for = None;
    }
}

fn field(ui: &mut Ui, title: &str, add_value: impl FnOnce(&mut Ui)) {
    ui.label(RichText::new(title).small().color(Color32::GRAY));
    add_value(ui);
    ui.add_space(6.0);
}

fn selected_record(ctx: &StateCtx) -> Option<UserRecord> {
    let users = ctx.compute::<ListUsersCompute>().users()?;
    ctx.state::<UserSelection>().resolve(users).cloned()
}

/// Shows the modal when the `user` parameter names a loaded user.
///
/// Closing it removes the parameter. A missing, malformed or stale parameter shows nothing
/// and is left as it is.
pub fn user_detail_modal(
    ctx: &mut StateCtx,
    detail: &mut UserDetailState,
    ui: &mut Ui,
) -> Option<Response> {
    let Some(record) = selected_record(ctx) else {
        detail.reset();
        return None;
    };
    if detail.copied_for.is_some_and(|id| id != record.id) {
        detail.reset();
    }

    let mut open = true;
    let mut close_clicked = false;

    let response = Window::new(RichText::new(&record.name).strong())
        .id(Id::new("user_detail_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(MODAL_WIDTH)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            field(ui, "Email", |ui| {
                ui.horizontal(|ui| {
                    ui.strong(&record.email);
                    if ui
                        .small_button(COPY_EMAIL_LABEL)
                        .on_hover_text("Copy email")
                        .clicked()
                    {
                        copy_text(ui.ctx(), &record.email);
                        detail.copied_for = Some(record.id);
                    }
                    if detail.copied(record.id) {
                        ui.colored_label(Color32::from_rgb(34, 139, 34), COPIED_TEXT);
                    }
                });
            });
            field(ui, "Address", |ui| {
                ui.strong(&record.address);
            });
            field(ui, "Joined", |ui| {
                ui.strong(record.joined_display());
            });
            field(ui, "Notes", |ui| {
                ui.label(&record.notes);
            });

            ui.separator();
            if ui.button(CLOSE_LABEL).clicked() {
                close_clicked = true;
            }
        })
        .map(|inner| inner.response);

    if !open || close_clicked {
        log::debug!("closing detail for user {}", record.id);
        detail.reset();
        ctx.update(|selection: &mut UserSelection| selection.clear());
    }

    response
}
