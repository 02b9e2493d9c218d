use crate::constants::INIT_ACTION_TYPE;
use crate::runtime::Reducer;
use crate::types::action::Action;
use derivative::Derivative;
use std::sync::{Arc, LockResult, RwLock, RwLockReadGuard};
use tracing::debug;

/// Holds the current state and runs the reducer on every dispatched action.
///
/// Clones share the same state.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Store<S> {
    state: Arc<RwLock<S>>,
    reducer: Arc<Reducer<S>>,
}

impl<S: Clone> Store<S> {
    /// The state starts as whatever the reducer returns for the init action
    /// when given no state, i.e. its initial state.
    pub fn new(reducer: Reducer<S>) -> Self {
        let state = reducer.reduce(None, &Action::new(INIT_ACTION_TYPE));
        Store::with_state(reducer, state)
    }
    pub fn with_state(reducer: Reducer<S>, state: S) -> Self {
        Store {
            state: Arc::new(RwLock::new(state)),
            reducer: Arc::new(reducer),
        }
    }
    pub fn state(&self) -> LockResult<RwLockReadGuard<S>> {
        self.state.read()
    }
    pub fn dispatch(&self, action: &Action) {
        let mut state = self.state.write().expect("state write failed");
        debug!(action_type = %action.r#type, "Dispatching action");
        *state = self.reducer.reduce(Some(state.to_owned()), action);
    }
}
