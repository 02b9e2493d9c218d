use crate::runtime::ReduceError;
use crate::types::action::Action;
use derivative::Derivative;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

pub type Transition<S> = Arc<dyn Fn(S, &Action) -> Result<S, ReduceError<S>> + Send + Sync>;

/// Wraps a typed `(state, payload) -> state` function so it decodes the
/// payload of the action before being applied.
pub fn transition<S, T, F>(transition: F) -> Transition<S>
where
    S: 'static,
    T: DeserializeOwned + 'static,
    F: Fn(S, T) -> S + Send + Sync + 'static,
{
    Arc::new(move |state: S, action: &Action| match action.decode_payload::<T>() {
        Ok(payload) => Ok(transition(state, payload)),
        Err(error) => Err(ReduceError::new(state, error)),
    })
}

/// What runs for one action type.
///
/// `next` handles regular actions and `throw` handles actions flagged with
/// `error`. A missing half leaves the state as it is.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct ActionHandler<S> {
    next: Option<Transition<S>>,
    throw: Option<Transition<S>>,
}

impl<S: 'static> ActionHandler<S> {
    /// The same transition handles both regular and error actions.
    pub fn new<T, F>(transition: F) -> Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(S, T) -> S + Send + Sync + 'static,
    {
        let transition = self::transition(transition);
        ActionHandler {
            next: Some(transition.clone()),
            throw: Some(transition),
        }
    }
    pub fn identity() -> Self {
        ActionHandler {
            next: None,
            throw: None,
        }
    }
    pub fn next<T, F>(self, next: F) -> Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(S, T) -> S + Send + Sync + 'static,
    {
        ActionHandler {
            next: Some(transition(next)),
            ..self
        }
    }
    pub fn throw<T, F>(self, throw: F) -> Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(S, T) -> S + Send + Sync + 'static,
    {
        ActionHandler {
            throw: Some(transition(throw)),
            ..self
        }
    }
}

impl<S> ActionHandler<S> {
    pub fn handle(&self, state: S, action: &Action) -> Result<S, ReduceError<S>> {
        let transition = if action.error {
            &self.throw
        } else {
            &self.next
        };
        match transition {
            Some(transition) => transition(state, action),
            None => Ok(state),
        }
    }
}

impl<S> fmt::Debug for ActionHandler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandler")
            .field("next", &self.next.is_some())
            .field("throw", &self.throw.is_some())
            .finish()
    }
}
