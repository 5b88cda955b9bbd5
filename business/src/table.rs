//! Users table: filter and sort input state plus the derived view.

use std::any::{Any, TypeId};

use userdesk_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl, state_assign_impl};

use crate::columns::{ColumnSpec, empty_message};
use crate::filter::{FilterState, filter_users};
use crate::list_users::{ListUsersCompute, ListUsersResult};
use crate::sort::{SortIndicator, SortState, sort_users};
use crate::user::{UserField, UserRecord, UserStatus};

/// Filter then sort. Sorting only ever sees records that passed the filter.
pub fn derive_view<'a>(
    records: &'a [UserRecord],
    filter: &FilterState,
    sort: &SortState,
) -> Vec<&'a UserRecord> {
    sort_users(&filter_users(records, filter), sort)
}

/// User-controlled inputs of the table. Changed only by explicit user actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersTableState {
    filter: FilterState,
    sort: SortState,
}

impl UsersTableState {
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn set_name_filter(&mut self, pattern: impl Into<String>) {
        self.filter.name_pattern = pattern.into();
    }

    pub fn set_status_filter(&mut self, status: Option<UserStatus>) {
        self.filter.status = status;
    }

    pub fn toggle_sort(&mut self, key: UserField) {
        self.sort.toggle(key);
    }

    /// Header click. Columns that are not sortable leave the state alone.
    pub fn toggle_column(&mut self, column: &ColumnSpec) {
        if column.sortable {
            self.toggle_sort(column.field);
        }
    }

    pub fn indicator(&self, column: &ColumnSpec) -> Option<SortIndicator> {
        column
            .sortable
            .then(|| self.sort.indicator(column.field))
    }
}

impl State for UsersTableState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// What the table area shows. "Not loaded", "loading", "failed" and "loaded but empty" are
/// all distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UsersView {
    #[default]
    NotLoaded,
    Loading,
    Failed(String),
    Ready {
        rows: Vec<UserRecord>,
        filters_active: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct UsersTableCompute {
    pub view: UsersView,
}

impl UsersTableCompute {
    pub fn rows(&self) -> &[UserRecord] {
        match &self.view {
            UsersView::Ready { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Message for a loaded view without rows, `None` otherwise.
    pub fn empty_message(&self) -> Option<&'static str> {
        match &self.view {
            UsersView::Ready {
                rows,
                filters_active,
            } if rows.is_empty() => Some(empty_message(*filters_active)),
            _ => None,
        }
    }
}

impl Compute for UsersTableCompute {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<UsersTableState>()],
            vec![TypeId::of::<ListUsersCompute>()],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let table = deps.get_state_ref::<UsersTableState>();
        let list = deps.get_compute_ref::<ListUsersCompute>();

        let view = match &list.result {
            ListUsersResult::Idle => UsersView::NotLoaded,
            ListUsersResult::Loading => UsersView::Loading,
            ListUsersResult::Error(message) => UsersView::Failed(message.clone()),
            ListUsersResult::Loaded(records) => UsersView::Ready {
                rows: derive_view(records, &table.filter, &table.sort)
                    .into_iter()
                    .cloned()
                    .collect(),
                filters_active: table.filter.is_active(),
            },
        };

        updater.set(Self { view });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
