use crate::types::action::{Action, ActionCreator, ActionType};
use crate::unit_tests::{SampleState, ADD, NEGATE, REPLACE};
use serde_json::json;

#[test]
fn action_creator_to_string() {
    assert_eq!(ADD.to_string(), "ADD");
    assert_eq!(REPLACE.to_string(), "REPLACE_STATE");
    assert_eq!(ActionType::from(NEGATE.to_owned()), ActionType::from("NEGATE"));
}

#[test]
fn create_actions() {
    assert_eq!(ADD.create(2).unwrap(), Action::with_payload("ADD", json!(2)));
    assert_eq!(NEGATE.action(), Action::new("NEGATE"));
    assert_eq!(
        REPLACE.create(SampleState::with_count(1)).unwrap(),
        Action::with_payload("REPLACE_STATE", json!({ "count": 1, "message": null }))
    );
    let error = ADD.create_error(2).unwrap();
    assert!(error.error);
    assert_eq!(error.payload, Some(json!(2)));
}

#[test]
fn creators_compare_by_action_type() {
    assert_eq!(*ADD, ActionCreator::<i32>::new("ADD"));
    assert_ne!(*ADD, ActionCreator::<i32>::new("SUBTRACT"));
}
