//! Declarative field validation
//!
//! Declare an ordered chain of rules per named field, then run every chain
//! against an input record to collect human-readable messages per field.
//!
//! # Examples
//!
//! ## Fluent chains
//!
//! ```
//! use fieldcheck_validation::{Validator, ValidationError};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator.field("age").number().min(18).max(65);
//!
//! let errors = validator.validate(&json!({"age": 70}));
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::new(
//!         "age",
//!         vec!["Value must be less than or equal to 65".to_string()],
//!     )]
//! );
//! ```
//!
//! ## Bulk configuration
//!
//! ```
//! use fieldcheck_validation::{configure, Validator};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! configure!(validator, {
//!     "email" => |f| f.required().email().with_message("Invalid email format"),
//!     "role" => |f| f.one_of(["admin", "user", "guest"]),
//! });
//!
//! let errors = validator.validate(&json!({"email": "not-an-email", "role": "user"}));
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].errors, vec!["Invalid email format"]);
//! ```
//!
//! ## Custom predicates
//!
//! ```
//! use fieldcheck_validation::Validator;
//! use serde_json::{json, Value};
//!
//! let mut validator = Validator::new();
//! validator
//!     .field("password")
//!     .required()
//!     .min(8)
//!     .custom(|value: &Value| {
//!         value.as_str().is_some_and(|s| {
//!             s.chars().any(|c| c.is_ascii_uppercase()) && s.chars().any(|c| c.is_ascii_digit())
//!         })
//!     })
//!     .with_message("Password must contain at least one uppercase letter and one number");
//!
//! assert!(validator.validate(&json!({"password": "StrongPass123"})).is_empty());
//! assert_eq!(validator.validate(&json!({"password": "weak"}))[0].errors.len(), 2);
//! ```

mod errors;
mod rules;
mod traits;
mod validator;
pub mod validators;

pub use errors::{Error, Result, ValidationError, ValidationErrors};
pub use rules::{Predicate, Rule, RuleChain};
pub use traits::{Record, Verdict};
pub use validator::{Configurator, Validator, create_validator};

/// Declare rules for several fields in one call.
///
/// Each entry names a field and a closure receiving its [`RuleChain`]; the
/// closure's result is discarded, so a fluent chain can be written inline.
///
/// ```
/// use fieldcheck_validation::{configure, Validator};
///
/// let mut validator = Validator::new();
/// configure!(validator, {
///     "name" => |f| f.required().string(),
///     "tags" => |f| {
///         f.custom(|v: &serde_json::Value| v.is_array());
///     },
/// });
/// assert_eq!(validator.len(), 2);
/// ```
#[macro_export]
macro_rules! configure {
    ($validator:expr, { $($name:expr => |$chain:ident| $body:expr),* $(,)? }) => {
        ($validator).configure([
            $((
                $name,
                ::std::boxed::Box::new(|$chain: &mut $crate::RuleChain| {
                    $body;
                }) as $crate::Configurator<'_>,
            )),*
        ])
    };
}
