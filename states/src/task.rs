//! Handles for commands spawned by [`crate::StateCtx::flush_commands`].

use std::any::TypeId;
use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

use crate::CommandFuture;

/// One spawned command run: the command type plus a per-context spawn counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    command: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(command: TypeId, generation: u64) -> Self {
        Self {
            command,
            generation,
        }
    }

    pub fn command(&self) -> TypeId {
        self.command
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task#{} ({:?})", self.generation, self.command)
    }
}

/// Cancellation side of a spawned command. The command sees the same token and is expected
/// to stop once it fires.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel: CancellationToken,
    finished: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel: CancellationToken) -> Self {
        Self {
            id,
            cancel,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Wraps `future` so this handle reports finished once it completes.
    pub fn track(&self, future: CommandFuture) -> CommandFuture {
        let finished = Arc::clone(&self.finished);
        Box::pin(async move {
            future.await;
            finished.store(true, Ordering::Release);
        })
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
