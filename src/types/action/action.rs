use crate::runtime::ReducerError;
use crate::types::action::ActionType;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Not;

/// A flux-standard action.
///
/// ```json
/// { "type": "ADD", "payload": 2 }
/// { "type": "ADD", "payload": "not a number", "error": true, "meta": { "source": "form" } }
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Action {
    #[serde(rename = "type")]
    pub r#type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Set when `payload` describes a failure. Error actions are routed to the
    /// `throw` half of an [`ActionHandler`].
    ///
    /// [`ActionHandler`]: crate::runtime::ActionHandler
    #[serde(default, skip_serializing_if = "Not::not")]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Action {
    pub fn new<T: Into<ActionType>>(r#type: T) -> Self {
        Action {
            r#type: r#type.into(),
            payload: None,
            error: false,
            meta: None,
        }
    }
    /// A `null` payload is stored as no payload, which is also how it reads
    /// back from JSON.
    pub fn with_payload<T: Into<ActionType>>(r#type: T, payload: Value) -> Self {
        Action {
            payload: Some(payload).filter(|payload| !payload.is_null()),
            ..Action::new(r#type)
        }
    }
    pub fn with_meta(self, meta: Value) -> Self {
        Action {
            meta: Some(meta),
            ..self
        }
    }
    pub fn into_error(self) -> Self {
        Action {
            error: true,
            ..self
        }
    }
    /// Missing payload decodes as `null`, which `()` and `Option<T>` accept.
    pub fn decode_payload<T: DeserializeOwned>(&self) -> Result<T, ReducerError> {
        T::deserialize(self.payload.as_ref().unwrap_or(&Value::Null))
            .map_err(|error| ReducerError::Payload(self.r#type.clone(), error.to_string()))
    }
}
