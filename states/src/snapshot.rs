use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::Error;

/// Owned copies of every state and compute that opted into `snapshot()`.
///
/// Commands run detached from the context, so they read their inputs from here.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: Clone + 'static>(&self) -> Result<T, Error> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
            .ok_or(Error::SnapshotMissing {
                name: type_name::<T>(),
            })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.inner.contains_key(&TypeId::of::<T>())
    }
}
