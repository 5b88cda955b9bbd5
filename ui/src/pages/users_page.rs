//! The users page: title, filters, table and detail modal.

use egui::{Response, Ui};
use userdesk_business::{UsersTableCompute, UsersView};

use crate::{state::State, widgets};

pub const PAGE_TITLE: &str = "Manage Users";

enum Body {
    Loading,
    Failed(String),
    Table,
}

/// Renders the users page. Exactly one of the loading, error and table areas is shown.
pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    let body = match &state.ctx.compute::<UsersTableCompute>().view {
        UsersView::NotLoaded | UsersView::Loading => Body::Loading,
        UsersView::Failed(message) => Body::Failed(message.clone()),
        UsersView::Ready { .. } => Body::Table,
    };

    let response = ui
        .vertical(|ui| {
            ui.heading(PAGE_TITLE);
            ui.add_space(12.0);

            match body {
                Body::Loading => {
                    widgets::loading_view(ui);
                }
                Body::Failed(message) => {
                    widgets::error_view(&mut state.ctx, &message, ui);
                }
                Body::Table => {
                    widgets::filter_bar(&mut state.ctx, ui);
                    ui.add_space(8.0);
                    widgets::users_table(&mut state.ctx, ui);
                }
            }
        })
        .response;

    widgets::user_detail_modal(&mut state.ctx, &mut state.detail, ui);

    response
}
