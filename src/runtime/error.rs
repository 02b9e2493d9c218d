use crate::constants::{REDUCER_ERROR_PAYLOAD_CODE, REDUCER_ERROR_SERDE_CODE};
use crate::types::action::ActionType;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ReducerError {
    /// Returned by [`ActionCreator::create`] when the payload cannot be
    /// represented as JSON.
    ///
    /// [`ActionCreator::create`]: crate::types::action::ActionCreator::create
    Serde(String),
    /// The payload of the action does not decode into the payload type of the
    /// transition registered for it.
    Payload(ActionType, String),
}

impl ReducerError {
    pub fn message(&self) -> String {
        match &self {
            ReducerError::Serde(message) => format!("Serialization error: {message}"),
            ReducerError::Payload(action_type, message) => {
                format!("Invalid payload for {action_type}: {message}")
            }
        }
    }
    pub fn code(&self) -> u32 {
        match &self {
            ReducerError::Serde(_) => REDUCER_ERROR_SERDE_CODE,
            ReducerError::Payload(_, _) => REDUCER_ERROR_PAYLOAD_CODE,
        }
    }
}

impl fmt::Display for ReducerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for ReducerError {}

impl Serialize for ReducerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ReducerError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// A transition refused the action; the state it was given is handed back
/// untouched.
#[derive(Debug)]
pub struct ReduceError<S> {
    state: S,
    error: ReducerError,
}

impl<S> ReduceError<S> {
    pub fn new(state: S, error: ReducerError) -> Self {
        ReduceError { state, error }
    }
    pub fn error(&self) -> &ReducerError {
        &self.error
    }
    pub fn into_state(self) -> S {
        self.state
    }
    pub fn into_parts(self) -> (S, ReducerError) {
        (self.state, self.error)
    }
}

impl<S> fmt::Display for ReduceError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<S: fmt::Debug> Error for ReduceError<S> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
