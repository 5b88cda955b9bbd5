//! Build and environment helpers shared by the userdesk crates.

pub mod version_info;
