// Input records and the predicate verdict protocol

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A flat mapping from field name to value that can be validated.
///
/// Keys are looked up verbatim: `"address.city"` is a key of its own, not a
/// path into a nested `address` object.
pub trait Record {
    /// Value stored under `field`, or `None` when the key is absent
    fn get_field(&self, field: &str) -> Option<&Value>;
}

impl Record for Map<String, Value> {
    fn get_field(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

/// Objects are looked up by key; any other JSON value has no fields.
impl Record for Value {
    fn get_field(&self, field: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(field))
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn get_field(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl Record for BTreeMap<String, Value> {
    fn get_field(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn get_field(&self, field: &str) -> Option<&Value> {
        (**self).get_field(field)
    }
}

/// Outcome of a single rule predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Fail with the rule's declared message
    Fail,
    /// Fail with a message chosen by the predicate
    FailWith(String),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Verdict::Pass } else { Verdict::Fail }
    }
}

/// `Err(message)` fails with that message.
impl From<Result<(), String>> for Verdict {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Verdict::Pass,
            Err(message) => Verdict::FailWith(message),
        }
    }
}

/// `Some(message)` fails with that message, `None` passes.
impl From<Option<String>> for Verdict {
    fn from(message: Option<String>) -> Self {
        match message {
            None => Verdict::Pass,
            Some(message) => Verdict::FailWith(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_lookup() {
        let data = json!({"name": "Rose", "address.city": "Hue"});
        assert_eq!(data.get_field("name"), Some(&json!("Rose")));
        assert_eq!(data.get_field("address.city"), Some(&json!("Hue")));
        assert!(data.get_field("color").is_none());
    }

    #[test]
    fn test_dotted_key_is_not_a_path() {
        let data = json!({"address": {"city": "Hue"}});
        assert!(data.get_field("address.city").is_none());
    }

    #[test]
    fn test_non_object_has_no_fields() {
        assert!(json!([1, 2, 3]).get_field("0").is_none());
        assert!(Value::Null.get_field("name").is_none());
    }

    #[test]
    fn test_hash_map_lookup() {
        let mut data = HashMap::new();
        data.insert("age".to_string(), json!(30));
        assert_eq!(data.get_field("age"), Some(&json!(30)));
    }

    #[test]
    fn test_verdict_conversions() {
        assert_eq!(Verdict::from(true), Verdict::Pass);
        assert_eq!(Verdict::from(false), Verdict::Fail);
        assert_eq!(
            Verdict::from(Err::<(), _>("too short".to_string())),
            Verdict::FailWith("too short".to_string())
        );
        assert!(Verdict::from(None::<String>).is_pass());
    }
}
