//! Fuzz target for validating raw JSON documents.
//!
//! Malformed input must surface as an `Error`, never as a panic.

#![no_main]

use fieldcheck_validation::{Validator, configure};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut validator = Validator::new();
    configure!(validator, {
        "name" => |f| f.required().string().length(1, Some(64)).trim(),
        "age" => |f| f.number().min(0).max(150),
        "email" => |f| f.email(),
        "site" => |f| f.url(),
        "born" => |f| f.date(),
    });

    if let Ok(errors) = validator.validate_json(text) {
        for error in &errors {
            assert!(!error.errors.is_empty());
            assert!(validator.contains(&error.field));
        }
    }
});
