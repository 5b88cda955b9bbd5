use std::any::{Any, type_name};
use std::fmt::Debug;

/// A value owned by [`crate::StateCtx`].
///
/// States are only changed by explicit calls (`state_mut`, `update`) or by an
/// [`crate::Updater`] message applied during `sync_computes`.
pub trait State: Any + Debug + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// A `Send` copy handed to commands. States without a snapshot are invisible to commands.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for states: replace `target` when the box holds a `T`.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::error!("state_assign_impl: update is not a {}", type_name::<T>()),
    }
}
