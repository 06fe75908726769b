// Built-in predicates
//
// Every check here accepts any JSON value and answers `false` for shapes it
// does not understand, so a chain never panics on mistyped input.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?|ftp)://[^\s/$.?#].[^\s]*$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z0-9]+$").unwrap());

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// `%#z` also accepts a bare `Z`.
const ZONED_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z"];

/// Default failure messages, one per rule kind.
pub mod messages {
    pub const REQUIRED: &str = "This field is required";
    pub const STRING: &str = "This field must be a string";
    pub const NUMBER: &str = "This field must be a number";
    pub const BOOLEAN: &str = "This field must be a boolean";
    pub const EMAIL: &str = "This field must be a valid email address";
    pub const URL: &str = "This field must be a valid URL";
    pub const PATTERN: &str = "This field does not match the required pattern";
    pub const ENUM: &str = "Invalid value";
    pub const LOWERCASE: &str = "This field must be lowercase";
    pub const UPPERCASE: &str = "This field must be uppercase";
    pub const ALPHANUMERIC: &str = "This field must contain only letters and numbers";
    pub const DATE: &str = "This field must be a valid date";
    pub const TRIM: &str = "This field must not have leading or trailing whitespace";
    pub const NO_WHITESPACE: &str = "This field must not contain any whitespace";
    pub const CUSTOM: &str = "Invalid value";

    pub fn min(limit: f64) -> String {
        format!("Value must be greater than or equal to {}", display_limit(limit))
    }

    pub fn max(limit: f64) -> String {
        format!("Value must be less than or equal to {}", display_limit(limit))
    }

    fn display_limit(limit: f64) -> String {
        if limit.is_nan() {
            "NaN".to_string()
        } else if limit.is_infinite() {
            if limit > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
        } else {
            limit.to_string()
        }
    }

    pub fn length(min: usize, max: Option<usize>) -> String {
        match max {
            Some(max) => format!("This field must be between {} and {} characters long", min, max),
            None => format!("This field must be between {} and ∞ characters long", min),
        }
    }
}

/// Length used by the length-aware rules: Unicode scalar values, not bytes.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn with_str(value: &Value, check: impl FnOnce(&str) -> bool) -> bool {
    value.as_str().is_some_and(check)
}

/// Present and not the empty string.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// JSON numbers are always finite, so no NaN check is needed here.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// Numbers compare by value, strings by length; anything else fails.
pub fn at_least(value: &Value, limit: f64) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(|n| n >= limit),
        Value::String(s) => char_len(s) as f64 >= limit,
        _ => false,
    }
}

/// Counterpart of [`at_least`].
pub fn at_most(value: &Value, limit: f64) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(|n| n <= limit),
        Value::String(s) => char_len(s) as f64 <= limit,
        _ => false,
    }
}

/// String length within `min..=max`, unbounded above when `max` is `None`.
pub fn has_length(value: &Value, min: usize, max: Option<usize>) -> bool {
    with_str(value, |s| {
        let len = char_len(s);
        len >= min && max.is_none_or(|max| len <= max)
    })
}

pub fn is_email(value: &Value) -> bool {
    with_str(value, |s| EMAIL_REGEX.is_match(s))
}

/// `http`, `https` and `ftp` URLs, scheme matched case-insensitively.
pub fn is_url(value: &Value) -> bool {
    with_str(value, |s| URL_REGEX.is_match(s))
}

pub fn matches(value: &Value, regex: &Regex) -> bool {
    with_str(value, |s| regex.is_match(s))
}

/// JSON equality, except that numbers compare by value so `1` matches `1.0`.
pub fn is_one_of(value: &Value, allowed: &[Value]) -> bool {
    allowed.iter().any(|candidate| match (candidate, value) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => candidate == value,
    })
}

pub fn is_lowercase(value: &Value) -> bool {
    with_str(value, |s| s.to_lowercase() == s)
}

pub fn is_uppercase(value: &Value) -> bool {
    with_str(value, |s| s.to_uppercase() == s)
}

/// ASCII letters and digits only, at least one character.
pub fn is_alphanumeric(value: &Value) -> bool {
    with_str(value, |s| ALPHANUMERIC_REGEX.is_match(s))
}

/// Strings in RFC 3339, RFC 2822, one of the plain date/time layouts or the
/// reduced `YYYY` / `YYYY-MM` forms, and integer millisecond timestamps.
pub fn is_date(value: &Value) -> bool {
    match value {
        Value::String(s) => parse_date(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .is_some(),
        _ => false,
    }
}

fn parse_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(s, format).is_ok())
        || DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(s, format).is_ok())
        || ZONED_DATE_TIME_FORMATS
            .iter()
            .any(|format| DateTime::parse_from_str(s, format).is_ok())
        || parse_partial_date(s)
}

/// Year or year-month, completed to the first day of the period.
fn parse_partial_date(s: &str) -> bool {
    let completed = match s.len() {
        4 => format!("{}-01-01", s),
        7 => format!("{}-01", s),
        _ => return false,
    };
    s.starts_with(|c: char| c.is_ascii_digit())
        && NaiveDate::parse_from_str(&completed, "%Y-%m-%d").is_ok()
}

pub fn is_trimmed(value: &Value) -> bool {
    with_str(value, |s| s.trim() == s)
}

pub fn has_no_whitespace(value: &Value) -> bool {
    with_str(value, |s| !s.chars().any(char::is_whitespace))
}
