// fieldcheck - declarative per-field validation
//
// Fluent rule chains bound to field names, run against JSON-like records to
// collect ordered, human-readable error messages per field.

// Re-export the validation engine
pub use fieldcheck_validation::*;

// Re-export logging controls
pub use fieldcheck_log as log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Configurator,
        Record,
        RuleChain,
        ValidationError,
        ValidationErrors,
        Validator,
        Verdict,
        configure,
        create_validator,
    };
    pub use serde_json::{Value, json};
}
