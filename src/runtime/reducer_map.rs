use crate::runtime::ActionHandler;
use crate::types::action::{ActionKey, ActionType};
use derivative::Derivative;
use serde::de::DeserializeOwned;
use std::collections::hash_map::{HashMap, IntoIter};
use std::iter::FromIterator;

/// Action handlers keyed by action type, registered in bulk with
/// [`ReducerFactory::add_reducers`].
///
/// Useful when handlers are generated, e.g. paging or sorting handlers shared
/// by every table of an application.
///
/// [`ReducerFactory::add_reducers`]: crate::runtime::ReducerFactory::add_reducers
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Default(bound = ""), Debug(bound = ""))]
pub struct ReducerMap<S> {
    handlers: HashMap<ActionType, ActionHandler<S>>,
}

impl<S: 'static> ReducerMap<S> {
    pub fn new() -> Self {
        ReducerMap::default()
    }
    pub fn insert<K, T, F>(&mut self, key: K, transition: F) -> &mut Self
    where
        K: ActionKey<T>,
        T: DeserializeOwned + 'static,
        F: Fn(S, T) -> S + Send + Sync + 'static,
    {
        self.insert_handler(key.into_action_type(), ActionHandler::new(transition))
    }
    pub fn insert_handler<K>(&mut self, key: K, handler: ActionHandler<S>) -> &mut Self
    where
        K: Into<ActionType>,
    {
        self.handlers.insert(key.into(), handler);
        self
    }
}

impl<S> ReducerMap<S> {
    pub fn get(&self, action_type: &str) -> Option<&ActionHandler<S>> {
        self.handlers.get(action_type)
    }
    pub fn contains(&self, action_type: &str) -> bool {
        self.handlers.contains_key(action_type)
    }
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S> IntoIterator for ReducerMap<S> {
    type Item = (ActionType, ActionHandler<S>);
    type IntoIter = IntoIter<ActionType, ActionHandler<S>>;
    fn into_iter(self) -> Self::IntoIter {
        self.handlers.into_iter()
    }
}

impl<S> FromIterator<(ActionType, ActionHandler<S>)> for ReducerMap<S> {
    fn from_iter<I: IntoIterator<Item = (ActionType, ActionHandler<S>)>>(iter: I) -> Self {
        ReducerMap {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl<S> Extend<(ActionType, ActionHandler<S>)> for ReducerMap<S> {
    fn extend<I: IntoIterator<Item = (ActionType, ActionHandler<S>)>>(&mut self, iter: I) {
        self.handlers.extend(iter)
    }
}
