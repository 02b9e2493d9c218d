use crate::types::action::{Action, ActionCreator};
use crate::unit_tests::NEGATE;
use serde_json::json;
use serde_test::{assert_tokens, Token};

#[test]
fn action() {
    assert_tokens(
        &vec![
            Action::new("NEGATE"),
            Action::with_payload("ADD", json!(2)),
        ],
        &[
            Token::Seq { len: Some(2) },
            Token::Struct {
                name: "Action",
                len: 1,
            },
            Token::Str("type"),
            Token::Str("NEGATE"),
            Token::StructEnd,
            Token::Struct {
                name: "Action",
                len: 2,
            },
            Token::Str("type"),
            Token::Str("ADD"),
            Token::Str("payload"),
            Token::Some,
            Token::U64(2),
            Token::StructEnd,
            Token::SeqEnd,
        ],
    );
}

#[test]
fn flux_standard_action_json() {
    let action = Action::with_payload("ADD", json!("not a number"))
        .into_error()
        .with_meta(json!({ "source": "form" }));
    let value = json!({
        "type": "ADD",
        "payload": "not a number",
        "error": true,
        "meta": { "source": "form" }
    });
    assert_eq!(serde_json::to_value(&action).unwrap(), value);
    assert_eq!(serde_json::from_value::<Action>(value).unwrap(), action);
}

#[test]
fn deserialize_action_defaults() {
    let action = serde_json::from_str::<Action>(r#"{"type":"NEGATE"}"#).unwrap();
    assert_eq!(action, Action::new("NEGATE"));
    assert!(!action.error);
    assert!(serde_json::from_str::<Action>(r#"{"payload":1}"#).is_err());
}

#[test]
fn null_payload_json() {
    let action = ActionCreator::<Option<i32>>::new("SET").create(None).unwrap();
    assert_eq!(action, Action::new("SET"));
    assert_eq!(NEGATE.create(()).unwrap(), NEGATE.action());
    assert_eq!(
        Action::with_payload("SET", serde_json::Value::Null),
        Action::new("SET")
    );
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(value, json!({ "type": "SET" }));
    assert_eq!(serde_json::from_value::<Action>(value).unwrap(), action);
    assert_eq!(
        serde_json::from_value::<Action>(json!({ "type": "SET", "payload": null })).unwrap(),
        action
    );
}
