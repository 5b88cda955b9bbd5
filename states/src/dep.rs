use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, Error, State};

/// Read-only view of the context handed to [`Compute::compute`].
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn try_state_ref<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "Dep::try_state_ref"))
    }

    /// # Panics
    /// Panics if `T` was not added to the context. Declared dependencies are always present.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        match self.try_state_ref::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_compute_ref<T: Compute>(&self) -> Result<&'a T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::compute_not_found(type_name::<T>(), "Dep::try_compute_ref"))
    }

    /// # Panics
    /// Panics if `T` was not recorded in the context.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        match self.try_compute_ref::<T>() {
            Ok(compute) => compute,
            Err(err) => panic!("{err}"),
        }
    }
}
