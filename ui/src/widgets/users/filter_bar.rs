//! Name search box and status select.

use egui::{ComboBox, Response, TextEdit, Ui};
use userdesk_business::{USER_STATUSES, UserStatus, UsersTableState};
use userdesk_states::StateCtx;

pub const NAME_FILTER_HINT: &str = "Search by name...";
pub const ALL_STATUSES_LABEL: &str = "All Status";

const NAME_FILTER_WIDTH: f32 = 280.0;

fn status_option_text(status: Option<UserStatus>) -> String {
    match status {
        Some(status) => status.as_str().to_uppercase(),
        None => ALL_STATUSES_LABEL.to_owned(),
    }
}

/// Renders the filter row and writes edits into [`UsersTableState`].
pub fn filter_bar(ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let filter = ctx.state::<UsersTableState>().filter().clone();
    let mut pattern = filter.name_pattern;
    let mut status = filter.status;

    ui.horizontal(|ui| {
        let name_edit = ui.add(
            TextEdit::singleline(&mut pattern)
                .hint_text(NAME_FILTER_HINT)
                .desired_width(NAME_FILTER_WIDTH),
        );
        if name_edit.changed() {
            ctx.update(|table: &mut UsersTableState| table.set_name_filter(pattern.as_str()));
        }

        let mut status_changed = false;
        ComboBox::from_id_salt("status_filter")
            .selected_text(status_option_text(status))
            .show_ui(ui, |ui| {
                status_changed |= ui
                    .selectable_value(&mut status, None, ALL_STATUSES_LABEL)
                    .changed();
                for option in USER_STATUSES {
                    status_changed |= ui
                        .selectable_value(&mut status, Some(option), status_option_text(Some(option)))
                        .changed();
                }
            });
        if status_changed {
            log::debug!("status filter: {}", status_option_text(status));
            ctx.update(|table: &mut UsersTableState| table.set_status_filter(status));
        }
    })
    .response
}
