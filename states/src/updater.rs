use std::any::{Any, TypeId, type_name};

use flume::Sender;

/// Sends replacement values for states or computes back to the owning context.
///
/// Updates are queued and applied on the next `StateCtx::sync_computes`, so an updater can
/// be moved into async tasks and callbacks.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { send }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            log::warn!(
                "Updater: context dropped, discarding update for {}",
                type_name::<T>()
            );
        }
    }
}
