use crate::runtime::{Reducer, ReducerMap};
use crate::types::action::ActionKey;
use serde::de::DeserializeOwned;

/// Collects transitions for a state `S` and turns them into a [`Reducer`].
///
/// ```ignore
/// let reducer = ReducerFactory::new(Counter::default())
///     .add_reducer(&*ADD, |state, count| Counter { count: state.count + count })
///     .add_reducer("RESET", |_, _: ()| Counter::default())
///     .to_reducer();
/// ```
///
/// Registering the same action type twice keeps the last transition.
#[derive(Debug)]
pub struct ReducerFactory<S> {
    state: S,
    reducer_map: ReducerMap<S>,
}

impl<S: 'static> ReducerFactory<S> {
    pub fn new(state: S) -> Self {
        ReducerFactory {
            state,
            reducer_map: ReducerMap::new(),
        }
    }
    /// `key` is an action type string or an [`ActionCreator<T>`], in which
    /// case the payload type of `transition` is inferred from the creator.
    ///
    /// [`ActionCreator<T>`]: crate::types::action::ActionCreator
    pub fn add_reducer<K, T, F>(mut self, key: K, transition: F) -> Self
    where
        K: ActionKey<T>,
        T: DeserializeOwned + 'static,
        F: Fn(S, T) -> S + Send + Sync + 'static,
    {
        self.reducer_map.insert(key, transition);
        self
    }
    pub fn add_reducers(mut self, reducer_map: ReducerMap<S>) -> Self {
        self.reducer_map.extend(reducer_map);
        self
    }
    pub fn to_reducer(self) -> Reducer<S> {
        Reducer::new(self.reducer_map, self.state)
    }
}

impl<S: Default + 'static> Default for ReducerFactory<S> {
    fn default() -> Self {
        ReducerFactory::new(S::default())
    }
}
