use std::collections::HashMap;
use std::marker::PhantomData;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use log::{debug, warn};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use super::effect::{Effect, EffectId};
use super::reducer::Reducer;

struct InFlight {
    generation: u64,
    handle: AbortHandle,
}

struct Core<S> {
    state: S,
    in_flight: HashMap<EffectId, InFlight>,
    next_generation: u64,
}

struct Inner<R: Reducer> {
    core: Mutex<Core<R::State>>,
    environment: R::Environment,
    changes: watch::Sender<R::State>,
    runtime: Handle,
    _reducer: PhantomData<fn() -> R>,
}

/// Owns a screen's state, runs the effects its reducer returns and publishes
/// every new state to subscribers.
///
/// Effects of the same [`EffectId`] are last-dispatched-wins: starting one aborts
/// the previous, and a result whose effect has been superseded or cancelled is
/// dropped instead of folded into state. Results of still-current effects are
/// folded in arrival order.
pub struct Store<R: Reducer> {
    inner: Arc<Inner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Store {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Creates a store whose effects run on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime. Use [`Store::with_handle`]
    /// to construct one elsewhere.
    pub fn new(initial_state: R::State, environment: R::Environment) -> Self {
        Self::with_handle(initial_state, environment, Handle::current())
    }

    /// Creates a store whose effects run on `runtime`.
    ///
    /// Actions can then be sent from any thread.
    pub fn with_handle(initial_state: R::State, environment: R::Environment, runtime: Handle) -> Self {
        let (changes, _) = watch::channel(initial_state.clone());
        Store {
            inner: Arc::new(Inner {
                core: Mutex::new(Core {
                    state: initial_state,
                    in_flight: HashMap::new(),
                    next_generation: 0,
                }),
                environment,
                changes,
                runtime,
                _reducer: PhantomData,
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.inner.core.lock().state.clone()
    }

    /// Receiver that observes every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.inner.changes.subscribe()
    }

    /// Number of effects currently running.
    pub fn in_flight(&self) -> usize {
        self.inner.core.lock().in_flight.len()
    }

    /// Dispatches an action. Effects it starts run on the store's runtime.
    pub fn send(&self, action: R::Action) {
        let mut core = self.inner.core.lock();
        self.apply(&mut core, action);
    }

    fn apply(&self, core: &mut Core<R::State>, action: R::Action) {
        let effect = R::reduce(&mut core.state, action, &self.inner.environment);
        self.inner.changes.send_replace(core.state.clone());

        match effect {
            Effect::None => {}
            Effect::Cancel(id) => {
                if let Some(previous) = core.in_flight.remove(&id) {
                    debug!("Cancelled in-flight effect {id}");
                    previous.handle.abort();
                }
            }
            Effect::Run { id, future } => {
                let generation = core.next_generation;
                core.next_generation += 1;

                let store = self.clone();
                // The task cannot fold its result before we release the lock,
                // so the in-flight entry below is always visible to it.
                let task = self.inner.runtime.spawn(async move {
                    match AssertUnwindSafe(future).catch_unwind().await {
                        Ok(action) => store.complete(id, generation, action),
                        Err(_) => store.abandon(id, generation),
                    }
                });

                let current = InFlight {
                    generation,
                    handle: task.abort_handle(),
                };
                if let Some(previous) = core.in_flight.insert(id, current) {
                    debug!("Effect {id} superseded, aborting the previous run");
                    previous.handle.abort();
                }
            }
        }
    }

    fn complete(&self, id: EffectId, generation: u64, action: R::Action) {
        let mut core = self.inner.core.lock();
        if !retire(&mut core, id, generation) {
            debug!("Dropping stale result of effect {id}");
            return;
        }
        self.apply(&mut core, action);
    }

    // The effect panicked; there is no action to fold in
    fn abandon(&self, id: EffectId, generation: u64) {
        let mut core = self.inner.core.lock();
        if retire(&mut core, id, generation) {
            warn!("Effect {id} panicked, its result is lost");
        }
    }
}

// Removes the in-flight entry if it still belongs to `generation`
fn retire<S>(core: &mut Core<S>, id: EffectId, generation: u64) -> bool {
    match core.in_flight.get(&id) {
        Some(current) if current.generation == generation => {
            core.in_flight.remove(&id);
            true
        }
        _ => false,
    }
}
