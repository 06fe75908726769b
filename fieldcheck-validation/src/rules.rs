// Rule chains: the ordered checks declared for one field

use crate::traits::Verdict;
use crate::validators::{self, messages};
use crate::Result;
use fieldcheck_log::warn;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe predicate over a single value.
pub type Predicate = Arc<dyn Fn(&Value) -> Verdict + Send + Sync>;

/// One check: a diagnostic kind, the message reported on failure and the
/// predicate deciding pass or fail.
#[derive(Clone)]
pub struct Rule {
    kind: String,
    message: String,
    predicate: Predicate,
}

impl Rule {
    pub fn new<F, R>(kind: impl Into<String>, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        Self {
            kind: kind.into(),
            message: message.into(),
            predicate: Arc::new(move |value: &Value| -> Verdict { predicate(value).into() }),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the predicate; `Some(message)` when the rule fails.
    pub fn check(&self, value: &Value) -> Option<String> {
        match (self.predicate)(value) {
            Verdict::Pass => None,
            Verdict::Fail => Some(self.message.clone()),
            Verdict::FailWith(message) => Some(message),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered rules for a single field.
///
/// Every builder method appends one rule and hands the same chain back, so
/// declarations read left to right in execution order:
///
/// ```
/// use fieldcheck_validation::Validator;
///
/// let mut validator = Validator::new();
/// validator
///     .field("username")
///     .required()
///     .string()
///     .length(3, Some(20))
///     .with_message("Username must be 3-20 characters")
///     .alphanumeric();
///
/// assert_eq!(validator.chain("username").map(|c| c.len()), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct RuleChain {
    field: String,
    rules: Vec<Rule>,
}

impl RuleChain {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
        }
    }

    /// Field this chain validates
    pub fn name(&self) -> &str {
        &self.field
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule kinds in declaration order
    pub fn kinds(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::kind).collect()
    }

    /// Append an arbitrary rule
    pub fn add_rule<F, R>(
        &mut self,
        kind: impl Into<String>,
        message: impl Into<String>,
        predicate: F,
    ) -> &mut Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        self.rules.push(Rule::new(kind, message, predicate));
        self
    }

    /// Replace the message of the most recently added rule
    pub fn with_message(&mut self, message: impl Into<String>) -> &mut Self {
        match self.rules.last_mut() {
            Some(rule) => rule.message = message.into(),
            None => warn!(
                target: "fieldcheck::rules",
                "with_message called before any rule was added to field '{}'",
                self.field
            ),
        }
        self
    }

    /// Fails on a missing value, `null` or the empty string.
    pub fn required(&mut self) -> &mut Self {
        self.add_rule("required", messages::REQUIRED, validators::is_present)
    }

    pub fn string(&mut self) -> &mut Self {
        self.add_rule("string", messages::STRING, validators::is_string)
    }

    pub fn number(&mut self) -> &mut Self {
        self.add_rule("number", messages::NUMBER, validators::is_number)
    }

    pub fn boolean(&mut self) -> &mut Self {
        self.add_rule("boolean", messages::BOOLEAN, validators::is_boolean)
    }

    /// Numbers must be `>= limit`; strings must have at least `limit` characters.
    pub fn min(&mut self, limit: impl Into<f64>) -> &mut Self {
        let limit = limit.into();
        self.add_rule("min", messages::min(limit), move |value: &Value| {
            validators::at_least(value, limit)
        })
    }

    /// Numbers must be `<= limit`; strings must have at most `limit` characters.
    pub fn max(&mut self, limit: impl Into<f64>) -> &mut Self {
        let limit = limit.into();
        self.add_rule("max", messages::max(limit), move |value: &Value| {
            validators::at_most(value, limit)
        })
    }

    /// String length in `min..=max`; `None` leaves the upper end open.
    pub fn length(&mut self, min: usize, max: Option<usize>) -> &mut Self {
        self.add_rule("length", messages::length(min, max), move |value: &Value| {
            validators::has_length(value, min, max)
        })
    }

    pub fn email(&mut self) -> &mut Self {
        self.add_rule("email", messages::EMAIL, validators::is_email)
    }

    pub fn url(&mut self) -> &mut Self {
        self.add_rule("url", messages::URL, validators::is_url)
    }

    /// String must match `regex`.
    pub fn pattern(&mut self, regex: Regex) -> &mut Self {
        self.add_rule("pattern", messages::PATTERN, move |value: &Value| {
            validators::matches(value, &regex)
        })
    }

    /// Compile `pattern` and append it as a [`pattern`](Self::pattern) rule.
    pub fn try_pattern(&mut self, pattern: &str) -> Result<&mut Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.pattern(regex))
    }

    /// Value must equal one of `allowed`.
    pub fn one_of<I, V>(&mut self, allowed: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
        self.add_rule("enum", messages::ENUM, move |value: &Value| {
            validators::is_one_of(value, &allowed)
        })
    }

    pub fn lowercase(&mut self) -> &mut Self {
        self.add_rule("lowercase", messages::LOWERCASE, validators::is_lowercase)
    }

    pub fn uppercase(&mut self) -> &mut Self {
        self.add_rule("uppercase", messages::UPPERCASE, validators::is_uppercase)
    }

    pub fn alphanumeric(&mut self) -> &mut Self {
        self.add_rule(
            "alphanumeric",
            messages::ALPHANUMERIC,
            validators::is_alphanumeric,
        )
    }

    pub fn date(&mut self) -> &mut Self {
        self.add_rule("date", messages::DATE, validators::is_date)
    }

    pub fn trim(&mut self) -> &mut Self {
        self.add_rule("trim", messages::TRIM, validators::is_trimmed)
    }

    pub fn no_whitespace(&mut self) -> &mut Self {
        self.add_rule(
            "noWhitespace",
            messages::NO_WHITESPACE,
            validators::has_no_whitespace,
        )
    }

    /// Caller-supplied predicate.
    ///
    /// The predicate may return `bool`, or a [`Verdict`]-convertible value
    /// carrying its own failure message:
    ///
    /// ```
    /// use fieldcheck_validation::RuleChain;
    /// use serde_json::json;
    ///
    /// let mut chain = RuleChain::new("port");
    /// chain.custom(|value| match value.as_u64() {
    ///     Some(port) if port > 0 && port < 65536 => Ok(()),
    ///     Some(port) => Err(format!("{} is not a valid port", port)),
    ///     None => Err("Port must be an integer".to_string()),
    /// });
    ///
    /// assert_eq!(chain.validate_value(&json!(70000)), vec!["70000 is not a valid port"]);
    /// ```
    pub fn custom<F, R>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<Verdict>,
    {
        self.add_rule("custom", messages::CUSTOM, predicate)
    }

    /// Run every rule against `value` and collect failure messages.
    ///
    /// All rules run, including after a failed `required`.
    pub fn validate_value(&self, value: &Value) -> Vec<String> {
        self.rules.iter().filter_map(|rule| rule.check(value)).collect()
    }
}
