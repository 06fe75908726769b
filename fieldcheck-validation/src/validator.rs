// Field registry and validation engine

use crate::rules::RuleChain;
use crate::traits::Record;
use crate::{Error, Result, ValidationError, ValidationErrors};
use fieldcheck_log::{debug, error};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Callback that declares rules on one field's chain, used by
/// [`Validator::configure`].
pub type Configurator<'a> = Box<dyn FnOnce(&mut RuleChain) + 'a>;

/// Stand-in for keys missing from the record.
static MISSING: Value = Value::Null;

/// Owns one [`RuleChain`] per field name and runs them against records.
///
/// Configuration needs `&mut self` and validation only `&self`, so a
/// validator shared between threads is necessarily fully configured.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    chains: Vec<RuleChain>,
    index: HashMap<String, usize>,
}

/// Create an empty validator.
pub fn create_validator() -> Validator {
    Validator::new()
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain for `name`, created empty on first use.
    ///
    /// Repeated calls return the same chain, so rules accumulate:
    ///
    /// ```
    /// use fieldcheck_validation::Validator;
    ///
    /// let mut validator = Validator::new();
    /// validator.field("x").required();
    /// validator.field("x").string();
    ///
    /// assert_eq!(validator.chain("x").unwrap().kinds(), vec!["required", "string"]);
    /// ```
    pub fn field(&mut self, name: impl Into<String>) -> &mut RuleChain {
        let name = name.into();
        let position = match self.index.get(&name) {
            Some(&position) => position,
            None => {
                debug!(target: "fieldcheck::validator", "Creating rule chain for field '{}'", name);
                let position = self.chains.len();
                self.chains.push(RuleChain::new(name.clone()));
                self.index.insert(name, position);
                position
            }
        };
        &mut self.chains[position]
    }

    /// Declare rules for many fields at once.
    ///
    /// Each configurator runs once against the chain [`field`](Self::field)
    /// returns for its name. The [`configure!`](crate::configure) macro
    /// builds the entries without manual boxing.
    pub fn configure<'a, I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Configurator<'a>)>,
        K: Into<String>,
    {
        for (name, configure_field) in entries {
            let chain = self.field(name);
            configure_field(&mut *chain);
            debug!(
                target: "fieldcheck::validator",
                "Configured field '{}' with {} rule(s)",
                chain.name(),
                chain.len()
            );
        }
    }

    /// Run every configured chain against `data`.
    ///
    /// Missing keys are validated as `null`; keys without a chain are
    /// ignored. Only failing fields are returned, in the order the fields
    /// were first declared.
    pub fn validate<R>(&self, data: &R) -> Vec<ValidationError>
    where
        R: Record + ?Sized,
    {
        let errors: Vec<ValidationError> = self
            .chains
            .iter()
            .filter_map(|chain| {
                let value = data.get_field(chain.name()).unwrap_or(&MISSING);
                let messages = chain.validate_value(value);
                (!messages.is_empty()).then(|| ValidationError::new(chain.name(), messages))
            })
            .collect();

        debug!(
            target: "fieldcheck::validator",
            "Validated {} field(s), {} failed",
            self.chains.len(),
            errors.len()
        );
        errors
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    pub fn check<R>(&self, data: &R) -> std::result::Result<(), ValidationErrors>
    where
        R: Record + ?Sized,
    {
        let errors = self.validate(data);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors))
        }
    }

    /// Parse a JSON document and validate it.
    ///
    /// The top level must be an object.
    pub fn validate_json(&self, json: &str) -> Result<Vec<ValidationError>> {
        let data: Value = serde_json::from_str(json)?;
        if !data.is_object() {
            return Err(Error::NotAnObject {
                found: json_kind(&data),
            });
        }
        Ok(self.validate(&data))
    }

    /// Validate fields concurrently on the tokio runtime.
    ///
    /// Each chain runs as its own task; results come back in the same order
    /// as [`validate`](Self::validate). A panicking predicate is re-raised
    /// here rather than being reported as a field error.
    ///
    /// ```
    /// # use fieldcheck_validation::Validator;
    /// # use serde_json::json;
    /// # tokio_test::block_on(async {
    /// let mut validator = Validator::new();
    /// validator.field("email").required().email();
    /// validator.field("age").number().min(18);
    ///
    /// let data = json!({"email": "nope", "age": 16});
    /// let errors = validator.validate_parallel(&data).await.unwrap();
    /// assert_eq!(errors, validator.validate(&data));
    /// # });
    /// ```
    pub async fn validate_parallel<R>(&self, data: &R) -> Result<Vec<ValidationError>>
    where
        R: Record + ?Sized,
    {
        use tokio::task::JoinSet;

        let mut set = JoinSet::new();

        for (position, chain) in self.chains.iter().enumerate() {
            let chain = chain.clone();
            let value = data.get_field(chain.name()).cloned().unwrap_or(Value::Null);

            set.spawn(async move {
                let messages = chain.validate_value(&value);
                (position, messages)
            });
        }

        let mut slots: Vec<Vec<String>> = vec![Vec::new(); self.chains.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((position, messages)) => slots[position] = messages,
                Err(e) if e.is_panic() => {
                    error!(target: "fieldcheck::validator", "Predicate panicked: {}", e);
                    std::panic::resume_unwind(e.into_panic());
                }
                Err(e) => {
                    error!(target: "fieldcheck::validator", "Validation task failed: {}", e);
                    return Err(Error::TaskFailed(e));
                }
            }
        }

        Ok(self
            .chains
            .iter()
            .zip(slots)
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(chain, messages)| ValidationError::new(chain.name(), messages))
            .collect())
    }

    /// Freeze the configuration for sharing across tasks or threads.
    pub fn into_shared(self) -> Arc<Validator> {
        Arc::new(self)
    }

    /// Configured field names, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.chains.iter().map(RuleChain::name)
    }

    pub fn chain(&self, name: &str) -> Option<&RuleChain> {
        self.index.get(name).map(|&position| &self.chains[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of configured fields
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
