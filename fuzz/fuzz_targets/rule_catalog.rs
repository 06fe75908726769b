//! Fuzz target for the built-in rule catalog.
//!
//! Every rule must accept any value shape and report at most one message
//! per rule.

#![no_main]

use arbitrary::Arbitrary;
use fieldcheck_validation::RuleChain;
use libfuzzer_sys::fuzz_target;
use serde_json::{Value, json};

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl FuzzValue {
    fn into_json(self) -> Value {
        match self {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => json!(b),
            FuzzValue::Int(n) => json!(n),
            // non-finite floats become null
            FuzzValue::Float(f) => json!(f),
            FuzzValue::Text(s) => json!(s),
            FuzzValue::List(items) => json!(items),
        }
    }
}

fuzz_target!(|input: (FuzzValue, f64, usize)| {
    let (value, limit, length) = input;
    let value = value.into_json();

    let mut chain = RuleChain::new("fuzz");
    chain
        .required()
        .string()
        .number()
        .boolean()
        .min(limit)
        .max(limit)
        .length(length % 256, None)
        .email()
        .url()
        .one_of(["a", "b"])
        .lowercase()
        .uppercase()
        .alphanumeric()
        .date()
        .trim()
        .no_whitespace();

    let messages = chain.validate_value(&value);
    assert!(messages.len() <= chain.len());
});
