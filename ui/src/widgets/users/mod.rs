//! Widgets of the users page.
//!
//! Each widget reads what it shows from the [`StateCtx`](userdesk_states::StateCtx) and writes
//! user actions back as state updates or queued commands. None of them fetch anything.

mod detail;
mod filter_bar;
mod status;
mod table;

pub use detail::{UserDetailState, user_detail_modal};
pub use filter_bar::filter_bar;
pub use status::{error_view, loading_view};
pub use table::users_table;
