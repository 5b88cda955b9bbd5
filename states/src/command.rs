use std::any::Any;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect.
///
/// Commands never run implicitly. They are queued with `StateCtx::enqueue_command`, receive
/// a snapshot of the context taken when the queue is flushed, and report back through the
/// [`Updater`]. Long running work should observe `cancel`.
pub trait Command: Any + Debug + Send {
    fn run(&self, snap: CommandSnapshot, updater: Updater, cancel: CancellationToken)
    -> CommandFuture;
}
