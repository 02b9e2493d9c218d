use crate::runtime::ReducerError;
use crate::types::action::ActionType;
use serde_test::{assert_ser_tokens, Token};

#[test]
fn reducer_error() {
    assert_ser_tokens(
        &vec![
            ReducerError::Serde("key must be a string".to_owned()),
            ReducerError::Payload(ActionType::from("ADD"), "invalid type".to_owned()),
        ],
        &[
            Token::Seq { len: Some(2) },
            Token::Struct {
                name: "ReducerError",
                len: 2,
            },
            Token::Str("code"),
            Token::U32(1),
            Token::Str("message"),
            Token::Str("Serialization error: key must be a string"),
            Token::StructEnd,
            Token::Struct {
                name: "ReducerError",
                len: 2,
            },
            Token::Str("code"),
            Token::U32(2),
            Token::Str("message"),
            Token::Str("Invalid payload for ADD: invalid type"),
            Token::StructEnd,
            Token::SeqEnd,
        ],
    );
}
