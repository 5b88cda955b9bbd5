mod env_version;
pub mod users;

pub use env_version::env_version;
pub use users::{UserDetailState, error_view, filter_bar, loading_view, user_detail_modal, users_table};
