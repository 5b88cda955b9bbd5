//! Shared helpers for the service integration tests.
#![allow(dead_code)]

use std::future::Future;

use axum_test::TestServer;
use userdesk_business::UserRecord;
use userdesk_services::{
    config::Config,
    routes,
    users::{SeededUserSource, UserSource, UserSourceError},
};

/// A source whose backend is always down.
#[derive(Debug, Clone, Default)]
pub struct FailingUserSource;

impl UserSource for FailingUserSource {
    fn list_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, UserSourceError>> + Send {
        async { Err(UserSourceError::Unavailable("connection refused".to_owned())) }
    }
}

pub fn server_with<U: UserSource>(source: U) -> TestServer {
    TestServer::new(routes(source, Config::new_for_test())).expect("test server should start")
}

pub fn demo_server() -> TestServer {
    server_with(SeededUserSource::demo())
}
