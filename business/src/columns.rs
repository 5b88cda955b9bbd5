//! Column descriptors consumed by the table renderer.

use crate::user::{UserField, UserRecord};

pub const EMPTY_FILTERED_MESSAGE: &str = "No users match your filters.";
pub const EMPTY_SOURCE_MESSAGE: &str = "No users found.";

/// Message shown when the derived view has no rows.
pub fn empty_message(filters_active: bool) -> &'static str {
    if filters_active {
        EMPTY_FILTERED_MESSAGE
    } else {
        EMPTY_SOURCE_MESSAGE
    }
}

/// Cell formatter overriding [`UserField::display_value`].
pub type CellFormat = fn(&UserRecord) -> String;

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub field: UserField,
    pub label: &'static str,
    pub sortable: bool,
    pub format: Option<CellFormat>,
}

impl ColumnSpec {
    pub const fn sortable(field: UserField, label: &'static str) -> Self {
        Self {
            field,
            label,
            sortable: true,
            format: None,
        }
    }

    pub const fn with_format(mut self, format: CellFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn cell_text(&self, record: &UserRecord) -> String {
        match self.format {
            Some(format) => format(record),
            None => self.field.display_value(record),
        }
    }
}

fn status_label(record: &UserRecord) -> String {
    record.status.label().to_owned()
}

/// Columns of the users table, left to right.
pub const USER_COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec::sortable(UserField::Id, "ID"),
    ColumnSpec::sortable(UserField::Name, "Name"),
    ColumnSpec::sortable(UserField::Email, "Email"),
    ColumnSpec::sortable(UserField::Status, "Status").with_format(status_label),
];
