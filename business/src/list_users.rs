//! Users fetch: a compute-shaped cache plus the commands that fill it.
//!
//! [`ListUsersCompute`] never does IO itself. [`LoadUsersCommand`] fetches once per session
//! and [`RetryUsersCommand`] re-issues the request after a failure. Both publish through
//! `Updater::set`, which marks the table view dirty.

use std::any::{Any, TypeId};

use userdesk_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, Updater,
    assign_impl,
};

use crate::api;
use crate::config::BusinessConfig;
use crate::user::UserRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListUsersResult {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(Vec<UserRecord>),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct ListUsersCompute {
    pub result: ListUsersResult,
}

impl ListUsersCompute {
    fn with(result: ListUsersResult) -> Self {
        Self { result }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.result, ListUsersResult::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, ListUsersResult::Loading)
    }

    pub fn users(&self) -> Option<&[UserRecord]> {
        match &self.result {
            ListUsersResult::Loaded(users) => Some(users),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            ListUsersResult::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Compute for ListUsersCompute {
    fn deps(&self) -> ComputeDeps {
        (Vec::<TypeId>::new(), Vec::new())
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Filled by LoadUsersCommand / RetryUsersCommand only.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

async fn fetch_users(config: BusinessConfig, updater: Updater, cancel: CancellationToken) {
    let api_url = config.api_url();

    tokio::select! {
        () = cancel.cancelled() => {
            log::info!("fetch_users: cancelled");
        }
        result = api::list_users(api_url.as_str()) => {
            let result = match result {
                Ok(users) => {
                    log::info!("fetch_users: loaded {} users", users.len());
                    ListUsersResult::Loaded(users)
                }
                Err(err) => {
                    log::error!("fetch_users: {err}");
                    ListUsersResult::Error(err.to_string())
                }
            };
            updater.set(ListUsersCompute::with(result));
        }
    }
}

fn config_from(snap: &CommandSnapshot) -> Option<BusinessConfig> {
    match snap.get::<BusinessConfig>() {
        Ok(config) => Some(config),
        Err(err) => {
            log::error!("users fetch needs BusinessConfig: {err}");
            None
        }
    }
}

fn is_in_flight(snap: &CommandSnapshot) -> bool {
    snap.get::<ListUsersCompute>()
        .is_ok_and(|list| list.is_loading())
}

/// Publishes `Loading` before returning, so the next snapshot already sees the request.
fn start_fetch(
    snap: &CommandSnapshot,
    updater: Updater,
    cancel: CancellationToken,
) -> CommandFuture {
    let Some(config) = config_from(snap) else {
        updater.set(ListUsersCompute::with(ListUsersResult::Error(
            "Missing API configuration".to_owned(),
        )));
        return Box::pin(async {});
    };
    updater.set(ListUsersCompute::with(ListUsersResult::Loading));
    Box::pin(fetch_users(config, updater, cancel))
}

/// Fetches the users unless a result is already cached or in flight.
#[derive(Debug, Default)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let should_fetch = snap
            .get::<ListUsersCompute>()
            .map(|list| list.is_idle())
            .unwrap_or(true);
        if !should_fetch {
            log::debug!("LoadUsersCommand: users already requested, skipping");
            return Box::pin(async {});
        }
        start_fetch(&snap, updater, cancel)
    }
}

/// Issues exactly one new request, whatever is cached. A retry while a request is still in
/// flight does nothing.
#[derive(Debug, Default)]
pub struct RetryUsersCommand;

impl Command for RetryUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        if is_in_flight(&snap) {
            log::debug!("RetryUsersCommand: a request is already in flight, skipping");
            return Box::pin(async {});
        }
        start_fetch(&snap, updater, cancel)
    }
}
