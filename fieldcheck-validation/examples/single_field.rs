//! Declare rules field by field, then validate a user record.
//!
//! Run with: `cargo run -p fieldcheck-validation --example single_field`

use fieldcheck_validation::{Result, create_validator};
use serde_json::{Value, json};

fn main() -> Result<()> {
    let mut validator = create_validator();

    validator
        .field("username")
        .required().with_message("Username is required")
        .string().with_message("Username must be a string")
        .alphanumeric().with_message("Username must be alphanumeric")
        .lowercase().with_message("Username must be in lowercase")
        .length(5, Some(15)).with_message("Username must be between 5 and 15 characters");

    validator
        .field("age")
        .required().with_message("Age is required")
        .number().with_message("Age must be a number")
        .min(18).with_message("Age must be at least 18")
        .max(65).with_message("Age must be at most 65");

    validator
        .field("email")
        .required().with_message("Email is required")
        .email().with_message("Email must be valid");

    validator
        .field("password")
        .required().with_message("Password is required")
        .string().with_message("Password must be a string")
        .min(8).with_message("Password must be at least 8 characters")
        .custom(|value: &Value| {
            value.as_str().is_some_and(|s| {
                s.chars().any(|c| c.is_ascii_uppercase()) && s.chars().any(|c| c.is_ascii_digit())
            })
        })
        .with_message("Password must contain at least one uppercase letter and one number");

    validator.field("isAdmin").boolean().with_message("isAdmin must be a boolean");
    validator.field("gender").one_of(["male", "female"]).with_message("Invalid gender");
    validator.field("profileUrl").url().with_message("Profile URL must be valid");
    validator.field("birthDate").date().with_message("Birth date must be a valid date");
    validator
        .field("promoCode")
        .try_pattern(r"^[A-Z0-9]{5,10}$")?
        .with_message("Promo code must be 5-10 uppercase alphanumeric characters");

    let user = json!({
        "username": "khanhnguyen",
        "age": 22,
        "email": "khanh.nguyen@example.com",
        "password": "Password123",
        "gender": "male",
        "isAdmin": true,
        "profileUrl": "https://example.com/profile/khanhnguyen",
        "birthDate": "2002-01-01",
        "promoCode": "PROMO2024",
    });

    let errors = validator.validate(&user);
    for error in &errors {
        println!("{}", error);
    }

    Ok(())
}
