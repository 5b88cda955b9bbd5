//! Users page logic: records, filtering, sorting, the table view, the URL-backed
//! selection and the fetch commands. Nothing in here renders.

pub mod api;
pub mod columns;
pub mod config;
pub mod filter;
pub mod http;
pub mod list_users;
pub mod selection;
pub mod sort;
pub mod table;
pub mod user;

#[cfg(test)]
mod test_utils;

pub use api::ApiError;
pub use columns::{ColumnSpec, EMPTY_FILTERED_MESSAGE, EMPTY_SOURCE_MESSAGE, USER_COLUMNS, empty_message};
pub use config::BusinessConfig;
pub use filter::{FilterState, filter_users};
pub use list_users::{ListUsersCompute, ListUsersResult, LoadUsersCommand, RetryUsersCommand};
pub use selection::{Location, MemoryLocation, USER_PARAM, UserSelection};
pub use sort::{SortDirection, SortIndicator, SortState, sort_users};
pub use table::{UsersTableCompute, UsersTableState, UsersView, derive_view};
pub use user::{USER_STATUSES, UserField, UserRecord, UserStatus};

use userdesk_states::StateCtx;

/// A context with every state, compute and command of the users page recorded.
pub fn users_page_ctx(config: BusinessConfig, selection: UserSelection) -> StateCtx {
    let mut ctx = StateCtx::new();

    ctx.add_state(config);
    ctx.add_state(UsersTableState::default());
    ctx.add_state(selection);

    ctx.record_compute(ListUsersCompute::default());
    ctx.record_compute(UsersTableCompute::default());

    ctx.record_command(LoadUsersCommand);
    ctx.record_command(RetryUsersCommand);

    if let Err(err) = ctx.verify_deps() {
        log::error!("users page dependency graph is invalid: {err}");
    }

    ctx
}
