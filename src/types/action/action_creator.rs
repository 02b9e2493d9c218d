use crate::runtime::ReducerError;
use crate::types::action::{Action, ActionType};
use derivative::Derivative;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// Creates actions of one type carrying a payload of type `P`.
///
/// Registering a transition with an `ActionCreator<P>` as the key fixes the
/// transition payload type to `P`.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), PartialEq(bound = ""), Eq(bound = ""), Debug(bound = ""))]
pub struct ActionCreator<P> {
    action_type: ActionType,
    #[derivative(PartialEq = "ignore", Debug = "ignore")]
    payload: PhantomData<fn(P)>,
}

impl<P> ActionCreator<P> {
    pub fn new<T: Into<ActionType>>(action_type: T) -> Self {
        ActionCreator {
            action_type: action_type.into(),
            payload: PhantomData,
        }
    }
    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }
}

impl<P: Serialize> ActionCreator<P> {
    pub fn create(&self, payload: P) -> Result<Action, ReducerError> {
        serde_json::to_value(payload)
            .map(|payload| Action::with_payload(self.action_type.clone(), payload))
            .map_err(|error| ReducerError::Serde(error.to_string()))
    }
    pub fn create_error(&self, payload: P) -> Result<Action, ReducerError> {
        self.create(payload).map(Action::into_error)
    }
}

impl ActionCreator<()> {
    pub fn action(&self) -> Action {
        Action::new(self.action_type.clone())
    }
}

impl<P> fmt::Display for ActionCreator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action_type)
    }
}

impl<P> From<ActionCreator<P>> for ActionType {
    fn from(action_creator: ActionCreator<P>) -> Self {
        action_creator.action_type
    }
}
