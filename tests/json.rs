#![cfg(feature = "regex")]

use sliceable::{
    lazy,
    primitives::{regex, string},
    BoxedParser, Parser,
};
use std::collections::HashMap;

#[derive(Clone, PartialEq, Debug)]
enum Value {
    Null,
    Number(f64),
    String(String),
    Bool(bool),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

fn init_logging() {
    let _ = env_logger::try_init();
}

fn whitespace<'a>() -> impl Parser<'a, Output = &'a str> + Clone {
    regex(r"\s*").expect("valid regex")
}

// A literal followed by any whitespace. Failing part way through a token
// shouldn't stop us trying the next alternative.
fn token<'a>(word: &str) -> impl Parser<'a, Output = &'a str> + Clone {
    string(word).attempt().skip(whitespace())
}

fn quoted<'a>() -> impl Parser<'a, Output = String> + Clone {
    regex(r#""(?:[^"\\]|\\.)*""#)
        .expect("valid regex")
        .map(|s: &str| s[1..s.len() - 1].replace("\\\"", "\""))
        .skip(whitespace())
}

fn number<'a>() -> impl Parser<'a, Output = f64> + Clone {
    regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
        .expect("valid regex")
        .map(|n: &str| n.parse::<f64>().expect("regex only matches valid numbers"))
        .skip(whitespace())
}

fn value<'a>() -> BoxedParser<'a, Value> {
    let null = token("null").to(Value::Null);
    let boolean = token("true")
        .to(Value::Bool(true))
        .or(token("false").to(Value::Bool(false)));
    let array = lazy(value)
        .sep_by(token(","))
        .surrounded_by(token("["), token("]"))
        .map(Value::Array)
        .scope("array");
    let field = quoted().skip(token(":")).product(lazy(value));
    let object = field
        .sep_by(token(","))
        .surrounded_by(token("{"), token("}"))
        .map(|fields| Value::Object(fields.into_iter().collect()))
        .scope("object");

    null.or(boolean)
        .or(number().map(Value::Number))
        .or(quoted().map(Value::String))
        .or(array)
        .or(object)
        .boxed()
}

fn document<'a>() -> impl Parser<'a, Output = Value> {
    whitespace().skip_left(value()).root()
}

#[test]
fn parses_scalars() {
    init_logging();
    assert_eq!(document().run("null"), Ok(Value::Null));
    assert_eq!(document().run(" true "), Ok(Value::Bool(true)));
    assert_eq!(document().run("false"), Ok(Value::Bool(false)));
    assert_eq!(document().run("-1.5e2"), Ok(Value::Number(-150.0)));
    assert_eq!(
        document().run(r#""say \"hi\"""#),
        Ok(Value::String("say \"hi\"".to_string()))
    );
}

#[test]
fn parses_nested_structures() {
    init_logging();
    let input = r#"
        {
            "name": "sliceable",
            "tags": ["parser", "combinator"],
            "stars": 3,
            "ok": true,
            "none": null,
            "empty": {}
        }
    "#;

    let expected = Value::Object(HashMap::from([
        ("name".to_string(), Value::String("sliceable".to_string())),
        (
            "tags".to_string(),
            Value::Array(vec![
                Value::String("parser".to_string()),
                Value::String("combinator".to_string()),
            ]),
        ),
        ("stars".to_string(), Value::Number(3.0)),
        ("ok".to_string(), Value::Bool(true)),
        ("none".to_string(), Value::Null),
        ("empty".to_string(), Value::Object(HashMap::new())),
    ]));

    assert_eq!(document().run(input), Ok(expected));
}

#[test]
fn slicing_hands_back_the_matched_text() {
    init_logging();
    let input = r#"[1, {"a": [true, []]}] tail"#;
    assert_eq!(value().slice().run(input), Ok(r#"[1, {"a": [true, []]}] "#));
    assert_eq!(
        value().slice().map(|s| s.trim_end().len()).run(input),
        Ok(input.find(" tail").unwrap())
    );
}

#[test]
fn failures_carry_context() {
    init_logging();
    let err = document().run(r#"{"a": tru}"#).unwrap_err();

    let frames: Vec<_> = err
        .frames()
        .map(|(loc, msg)| (loc.offset(), msg.to_string()))
        .collect();
    assert_eq!(
        frames,
        vec![(1, "'}'".to_string()), (0, "object".to_string())]
    );
    assert!(err.to_string().starts_with("1.1 object\n1.2 '}'"));
}

#[test]
fn trailing_garbage_is_rejected() {
    init_logging();
    assert!(document().run("[1, 2] 3").is_err());
    assert!(document().run("[1, 2").is_err());
}
