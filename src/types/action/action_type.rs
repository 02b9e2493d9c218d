use crate::types::action::ActionCreator;
use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// The string key identifying the kind of an [`Action`].
///
/// [`Action`]: crate::types::action::Action
#[derive(
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
    Debug,
)]
#[serde(transparent)]
pub struct ActionType(String);

impl From<&str> for ActionType {
    fn from(action_type: &str) -> Self {
        ActionType(action_type.to_owned())
    }
}

impl Borrow<str> for ActionType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ActionType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActionType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Anything a transition can be registered under.
///
/// Plain strings accept a transition with any payload type, while an
/// [`ActionCreator<P>`] only accepts transitions taking `P`, so the payload
/// type is inferred from the creator.
pub trait ActionKey<P> {
    fn into_action_type(self) -> ActionType;
}

impl<P> ActionKey<P> for ActionType {
    fn into_action_type(self) -> ActionType {
        self
    }
}

impl<P> ActionKey<P> for &ActionType {
    fn into_action_type(self) -> ActionType {
        self.clone()
    }
}

impl<P> ActionKey<P> for &str {
    fn into_action_type(self) -> ActionType {
        ActionType::from(self)
    }
}

impl<P> ActionKey<P> for String {
    fn into_action_type(self) -> ActionType {
        ActionType::from(self)
    }
}

impl<P> ActionKey<P> for &ActionCreator<P> {
    fn into_action_type(self) -> ActionType {
        self.action_type().clone()
    }
}

impl<P> ActionKey<P> for ActionCreator<P> {
    fn into_action_type(self) -> ActionType {
        self.into()
    }
}
