use crate::runtime::{ReduceError, ReducerMap};
use crate::types::action::Action;
use derivative::Derivative;
use std::sync::Arc;
use tracing::{trace, warn};

/// The compiled dispatch function built by [`ReducerFactory::to_reducer`].
///
/// [`ReducerFactory::to_reducer`]: crate::runtime::ReducerFactory::to_reducer
#[derive(Derivative)]
#[derivative(Clone(bound = "S: Clone"), Debug(bound = "S: std::fmt::Debug"))]
pub struct Reducer<S> {
    reducer_map: Arc<ReducerMap<S>>,
    initial_state: S,
}

impl<S> Reducer<S> {
    pub fn new(reducer_map: ReducerMap<S>, initial_state: S) -> Self {
        Reducer {
            reducer_map: Arc::new(reducer_map),
            initial_state,
        }
    }
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }
}

impl<S: Clone> Reducer<S> {
    /// Applies the transition registered for the action type, or returns the
    /// state as it is when there is none.
    ///
    /// A payload the transition cannot decode is logged and ignored.
    pub fn reduce(&self, state: Option<S>, action: &Action) -> S {
        self.try_reduce(state, action).unwrap_or_else(|rejected| {
            warn!(
                action_type = %action.r#type,
                error = %rejected.error(),
                "Action rejected, state left unchanged"
            );
            rejected.into_state()
        })
    }
    pub fn try_reduce(&self, state: Option<S>, action: &Action) -> Result<S, ReduceError<S>> {
        let state = state.unwrap_or_else(|| self.initial_state.to_owned());
        match self.reducer_map.get(&action.r#type) {
            Some(handler) => handler.handle(state, action),
            None => {
                trace!(action_type = %action.r#type, "No reducer for action");
                Ok(state)
            }
        }
    }
    pub fn into_fn(self) -> impl Fn(Option<S>, &Action) -> S {
        move |state: Option<S>, action: &Action| self.reduce(state, action)
    }
}
