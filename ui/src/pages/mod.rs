//! Pages of the application. There is a single page today: the users page.

mod users_page;

pub use users_page::{PAGE_TITLE, users_page};
