use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, VecDeque};
use std::fmt::{Debug, Formatter};

use flume::{Receiver, Sender};
#[cfg(not(target_arch = "wasm32"))]
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandFuture, CommandSnapshot, Compute, Dep, Error, Graph, State, StateSyncStatus,
    TaskHandle, TaskId, TopologyError, Updater,
};

type UpdateMessage = (TypeId, Box<dyn Any + Send>);

/// Owner of all states, computes and commands of an application.
///
/// A typical frame:
/// 1. `sync_computes()` applies values sent through [`Updater`]s since the last frame.
/// 2. `run_computed()` re-runs dirty computes, dependencies first.
/// 3. The UI reads with `state` / `cached` and mutates with `state_mut` / `update`.
/// 4. `flush_commands()` spawns the commands queued during the frame.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    status: BTreeMap<TypeId, StateSyncStatus>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    command_queue: VecDeque<TypeId>,

    graph: Graph<TypeId>,

    send: Sender<UpdateMessage>,
    recv: Receiver<UpdateMessage>,

    handles: Vec<TaskHandle>,
    generation: u64,
    #[cfg(not(target_arch = "wasm32"))]
    tasks: JoinSet<()>,
}

impl Debug for StateCtx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued_commands", &self.command_queue.len())
            .field("running_tasks", &self.task_count())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            status: BTreeMap::new(),
            commands: BTreeMap::new(),
            command_queue: VecDeque::new(),
            graph: Graph::with_capacity(16),
            send,
            recv,
            handles: Vec::new(),
            generation: 0,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.mark_dependents_dirty(id);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (state_ids, compute_ids) = compute.deps();
        for dep in state_ids.into_iter().chain(compute_ids) {
            self.graph.route_to(dep, id);
        }
        self.computes.insert(id, Box::new(compute));
        self.status.insert(id, StateSyncStatus::Init);
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    /// Checks the recorded compute dependencies for cycles and duplicate edges.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.topology_sort().map(|_| ())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::state"))
    }

    /// # Panics
    /// Panics if `T` was never added with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutable access to a state. Every compute depending on it is marked dirty.
    ///
    /// # Panics
    /// Panics if `T` was never added with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_dependents_dirty(id);
        match self
            .states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
        {
            Some(state) => state,
            None => panic!(
                "{}",
                Error::state_not_found(type_name::<T>(), "StateCtx::state_mut")
            ),
        }
    }

    pub fn update<T: State, R, F: FnOnce(&mut T) -> R>(&mut self, f: F) -> R {
        f(self.state_mut::<T>())
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never recorded with [`StateCtx::record_compute`].
    pub fn compute<T: Compute>(&self) -> &T {
        match self.cached::<T>() {
            Some(compute) => compute,
            None => panic!(
                "{}",
                Error::compute_not_found(type_name::<T>(), "StateCtx::compute")
            ),
        }
    }

    pub fn compute_status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.status.get(&TypeId::of::<T>()).copied()
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Applies every queued [`Updater`] message and marks the dependents of the updated
    /// values dirty.
    pub fn sync_computes(&mut self) {
        let pending: Vec<UpdateMessage> = self.recv.try_iter().collect();
        for (id, value) in pending {
            self.apply_update(id, value);
        }
    }

    fn apply_update(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        if let Some(compute) = self.computes.get_mut(&id) {
            compute.assign_box(value);
        } else if let Some(state) = self.states.get_mut(&id) {
            state.assign_box(value);
        } else {
            log::warn!("sync_computes: dropping update for unregistered type {id:?}");
            return;
        }
        self.mark_dependents_dirty(id);
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        for node in self.graph.connected(id) {
            if let Some(status) = self.status.get_mut(&node) {
                *status = StateSyncStatus::Dirty;
            }
        }
    }

    fn compute_order(&self) -> Vec<TypeId> {
        let sorted = match self.graph.topology_sort() {
            Ok(sorted) => sorted,
            Err(err) => {
                log::error!("run_computed: {err}");
                return Vec::new();
            }
        };
        let mut order: Vec<TypeId> = sorted
            .into_iter()
            .filter(|id| self.computes.contains_key(id))
            .collect();
        for id in self.computes.keys() {
            if !order.contains(id) {
                order.push(*id);
            }
        }
        order
    }

    /// Re-runs every dirty compute, dependencies first. Each result is applied before the
    /// next compute runs, so a whole chain settles within one call.
    pub fn run_computed(&mut self) {
        self.sync_computes();
        for id in self.compute_order() {
            if !self.status.get(&id).is_some_and(|status| status.needs_run()) {
                continue;
            }
            if let Some(compute) = self.computes.get(&id) {
                compute.compute(Dep::new(&self.states, &self.computes), self.updater());
            }
            self.status.insert(id, StateSyncStatus::Clean);
            self.sync_computes();
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snap.insert(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.snapshot() {
                snap.insert(*id, value);
            }
        }
        snap
    }

    pub fn enqueue_command<C: Command>(&mut self) {
        self.command_queue.push_back(TypeId::of::<C>());
    }

    pub fn pending_commands(&self) -> usize {
        self.command_queue.len()
    }

    /// Queues `C` and spawns it right away.
    pub fn dispatch<C: Command>(&mut self) {
        self.enqueue_command::<C>();
        self.flush_commands();
    }

    /// Spawns every queued command. Native builds must call this inside a Tokio runtime.
    ///
    /// Updates published so far, including those a command sent from `run` itself, are
    /// applied before each snapshot is taken.
    pub fn flush_commands(&mut self) {
        self.reap_finished();
        while let Some(id) = self.command_queue.pop_front() {
            self.sync_computes();
            let Some(command) = self.commands.get(&id) else {
                log::warn!("flush_commands: command {id:?} was never recorded");
                continue;
            };
            let cancel = CancellationToken::new();
            let future = command.run(self.snapshot(), self.updater(), cancel.clone());

            self.generation += 1;
            let handle = TaskHandle::new(TaskId::new(id, self.generation), cancel);
            let future = handle.track(future);
            self.handles.push(handle);
            self.spawn(future);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, future: CommandFuture) {
        self.tasks.spawn(future);
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, future: CommandFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }

    fn reap_finished(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            while let Some(result) = self.tasks.try_join_next() {
                if let Err(err) = result {
                    log::error!("command task failed: {err}");
                }
            }
            // A panicked task never reports finished.
            if self.tasks.is_empty() {
                self.handles.clear();
            }
        }
        self.handles
            .retain(|handle| !handle.is_finished() && !handle.is_cancelled());
    }

    /// Handles of spawned commands that have not been reaped yet.
    pub fn handles(&self) -> &[TaskHandle] {
        &self.handles
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn task_count(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| !handle.is_finished() && !handle.is_cancelled())
            .count()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut JoinSet<()> {
        &mut self.tasks
    }

    /// Cancels every spawned command and waits for them to stop.
    pub async fn shutdown(&mut self) {
        for handle in self.handles.drain(..) {
            log::debug!("shutdown: cancelling {}", handle.id());
            handle.cancel();
        }
        #[cfg(not(target_arch = "wasm32"))]
        self.tasks.shutdown().await;
    }
}
