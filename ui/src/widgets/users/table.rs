//! Sortable users table.
//!
//! Header buttons toggle the sort of their column and show its [`SortIndicator`]. Clicking a row
//! selects that user. Row order and content come from [`UsersTableCompute`] unchanged.

use egui::{Align, Button, Color32, Label, Layout, Response, RichText, Sense, Ui};
use egui_extras::{Column, TableBuilder};
use userdesk_business::{
    ColumnSpec, SortIndicator, USER_COLUMNS, UserField, UserSelection, UsersTableCompute,
    UsersTableState,
};
use userdesk_states::StateCtx;

pub const ID_WIDTH: f32 = 60.0;
pub const STATUS_WIDTH: f32 = 100.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

fn column_for(spec: &ColumnSpec) -> Column {
    match spec.field {
        UserField::Id => Column::exact(ID_WIDTH),
        UserField::Status => Column::exact(STATUS_WIDTH),
        _ => Column::remainder().at_least(140.0).clip(true),
    }
}

/// Header text, e.g. `Name ⬆`.
pub fn header_text(spec: &ColumnSpec, indicator: Option<SortIndicator>) -> String {
    match indicator {
        Some(indicator) => format!("{} {}", spec.label, indicator.symbol()),
        None => spec.label.to_owned(),
    }
}

/// Renders the table and applies header and row clicks to the context.
pub fn users_table(ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut toggled: Option<ColumnSpec> = None;
    let mut clicked: Option<u64> = None;

    let response = ui
        .vertical(|ui| {
            let table_state = ctx.state::<UsersTableState>();
            let selected = ctx.state::<UserSelection>().selected_id();
            let view = ctx.compute::<UsersTableCompute>();
            let rows = view.rows();

            let mut builder = TableBuilder::new(ui)
                .id_salt("users_table")
                .striped(true)
                .sense(Sense::click())
                .cell_layout(Layout::left_to_right(Align::Center));
            for spec in &USER_COLUMNS {
                builder = builder.column(column_for(spec));
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    for spec in &USER_COLUMNS {
                        header.col(|ui| {
                            let text = header_text(spec, table_state.indicator(spec));
                            if !spec.sortable {
                                ui.strong(text);
                            } else if ui
                                .add(Button::new(RichText::new(text).strong()).frame(false))
                                .clicked()
                            {
                                toggled = Some(*spec);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let Some(record) = rows.get(row.index()) else {
                            return;
                        };
                        row.set_selected(selected == Some(record.id));
                        for spec in &USER_COLUMNS {
                            row.col(|ui| {
                                ui.add(Label::new(spec.cell_text(record)).selectable(false));
                            });
                        }
                        if row.response().clicked() {
                            clicked = Some(record.id);
                        }
                    });
                });

            if let Some(message) = view.empty_message() {
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(message).color(Color32::GRAY));
                });
            }
        })
        .response;

    if let Some(spec) = toggled {
        ctx.update(|table: &mut UsersTableState| table.toggle_column(&spec));
    }
    if let Some(id) = clicked {
        log::debug!("row clicked: user {id}");
        ctx.update(|selection: &mut UserSelection| selection.select(id));
    }

    response
}
