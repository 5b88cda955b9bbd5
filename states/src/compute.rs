use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

use crate::{Dep, Updater};

/// Declared dependencies of a compute: `(state ids, compute ids)`.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// A derived value.
///
/// `compute` must be pure with respect to its dependencies: it reads them through
/// [`Dep`] and publishes the new value with [`Updater::set`]. Side effects belong in a
/// [`crate::Command`], because computes run implicitly whenever a dependency changes.
pub trait Compute: Any + Debug + Send {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for computes.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::error!("assign_impl: update is not a {}", type_name::<T>()),
    }
}
