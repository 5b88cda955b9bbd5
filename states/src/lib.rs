//! Reactive state context used by the userdesk business and UI layers.
//!
//! Three kinds of values live in a [`StateCtx`]:
//! - [`State`]: plain values owned by the context and mutated explicitly.
//! - [`Compute`]: derived values with declared dependencies, re-run when a dependency changes.
//! - [`Command`]: manual-only side effects (network IO) that publish results through an
//!   [`Updater`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod snapshot;
mod state;
mod state_sync_status;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId};
pub use updater::Updater;

/// Re-exported so commands can name the token type without depending on `tokio-util`.
pub use tokio_util::sync::CancellationToken;
