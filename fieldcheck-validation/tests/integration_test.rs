//! Integration tests for fieldcheck-validation

use fieldcheck_validation::{
    ValidationError, Validator, Verdict, configure, create_validator, validators::messages,
};
use serde_json::{Value, json};
use std::collections::HashMap;

fn errors_for<'a>(errors: &'a [ValidationError], field: &str) -> &'a [String] {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.errors.as_slice())
        .unwrap_or(&[])
}

fn flower_validator() -> Validator {
    let mut validator = create_validator();
    configure!(validator, {
        "name" => |f| f
            .required().with_message("Name is required")
            .string().with_message("Name must be a string"),
        "color" => |f| f
            .required().with_message("Color is required")
            .string().with_message("Color must be a string"),
        "petalCount" => |f| f
            .number().with_message("Petal count must be a number")
            .min(1).with_message("Petal count must be greater than 0"),
        "isPerennial" => |f| f.boolean().with_message("Is perennial must be a boolean"),
        "height" => |f| f
            .number().with_message("Height must be a number")
            .min(0).with_message("Height must be non-negative"),
        "bloomSeason" => |f| f
            .one_of(["Spring", "Summer", "Autumn", "Winter"])
            .with_message("Invalid bloom season"),
    });
    validator
}

#[test]
fn test_valid_flower() {
    let flower = json!({
        "name": "Rose",
        "color": "Red",
        "petalCount": 5,
        "isPerennial": true,
        "height": 30,
        "bloomSeason": "Summer",
    });
    assert!(flower_validator().validate(&flower).is_empty());
}

#[test]
fn test_invalid_flower() {
    let flower = json!({
        "name": "",
        "color": 123,
        "petalCount": -1,
        "isPerennial": "not a boolean",
        "height": "tall",
        "bloomSeason": "AllYear",
    });
    let errors = flower_validator().validate(&flower);

    assert_eq!(errors.len(), 6);
    assert_eq!(errors_for(&errors, "name"), ["Name is required"]);
    assert_eq!(errors_for(&errors, "color"), ["Color must be a string"]);
    assert_eq!(
        errors_for(&errors, "petalCount"),
        ["Petal count must be greater than 0"]
    );
    assert_eq!(
        errors_for(&errors, "isPerennial"),
        ["Is perennial must be a boolean"]
    );
    // "tall" is a 4 character string, so the length reading of min(0) passes
    assert_eq!(errors_for(&errors, "height"), ["Height must be a number"]);
    assert_eq!(errors_for(&errors, "bloomSeason"), ["Invalid bloom season"]);
}

#[test]
fn test_invalid_product() {
    let mut validator = create_validator();
    configure!(validator, {
        "name" => |f| f.required().string().with_message("Name must be a string"),
        "price" => |f| f
            .required()
            .number().with_message("Price must be a number")
            .min(0).with_message("Price must be non-negative"),
        "category" => |f| f
            .one_of(["Electronics", "Clothing", "Food"])
            .with_message("Invalid category"),
        "quantity" => |f| f.number().min(0).with_message("Quantity must be non-negative"),
        "description" => |f| f
            .string()
            .max(1000).with_message("Description must be 1000 characters or less"),
    });

    let product = json!({
        "name": 123,
        "price": "not a number",
        "category": "Invalid Category",
        "quantity": -5,
        "description": "A".repeat(1001),
    });
    let errors = validator.validate(&product);

    assert_eq!(errors.len(), 5);
    assert_eq!(errors_for(&errors, "name"), ["Name must be a string"]);
    assert_eq!(errors_for(&errors, "price"), ["Price must be a number"]);
    assert_eq!(errors_for(&errors, "category"), ["Invalid category"]);
    assert_eq!(
        errors_for(&errors, "quantity"),
        ["Quantity must be non-negative"]
    );
    assert_eq!(
        errors_for(&errors, "description"),
        ["Description must be 1000 characters or less"]
    );
}

#[test]
fn test_auth_data() {
    let mut validator = create_validator();
    configure!(validator, {
        "email" => |f| f.required().with_message("Email is required")
            .email().with_message("Invalid email format"),
        "password" => |f| f
            .required()
            .min(8).with_message("Password must be at least 8 characters")
            .custom(|value: &Value| {
                value.as_str().is_some_and(|s| {
                    s.chars().any(|c| c.is_ascii_uppercase()) && s.chars().any(|c| c.is_ascii_digit())
                })
            })
            .with_message("Password must contain at least one uppercase letter and one number"),
        "role" => |f| f.one_of(["admin", "user", "guest"]).with_message("Invalid role"),
        "rememberMe" => |f| f.boolean().with_message("Remember me must be a boolean"),
    });

    let valid = json!({
        "email": "user@example.com",
        "password": "StrongPass123",
        "role": "user",
        "rememberMe": true,
    });
    assert!(validator.validate(&valid).is_empty());

    let invalid = json!({
        "email": "not-an-email",
        "password": "weak",
        "role": "superuser",
        "rememberMe": "yes",
    });
    let errors = validator.validate(&invalid);
    assert_eq!(errors.len(), 4);
    // the format failure is reported, not the presence failure
    assert_eq!(errors_for(&errors, "email"), ["Invalid email format"]);
    assert_eq!(
        errors_for(&errors, "password"),
        [
            "Password must be at least 8 characters",
            "Password must contain at least one uppercase letter and one number"
        ]
    );
    assert_eq!(errors_for(&errors, "role"), ["Invalid role"]);
}

#[test]
fn test_custom_rules() {
    let mut validator = create_validator();
    configure!(validator, {
        "evenNumber" => |f| f
            .number().with_message("Must be a number")
            .custom(|value: &Value| value.as_i64().is_some_and(|n| n % 2 == 0))
            .with_message("Must be an even number"),
        "phoneNumber" => |f| f
            .custom(|value: &Value| {
                let digits = value.as_str().map(|s| s.trim_start_matches('+')).unwrap_or("");
                (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
            })
            .with_message("Invalid phone number"),
    });

    assert!(
        validator
            .validate(&json!({"evenNumber": 4, "phoneNumber": "+1234567890"}))
            .is_empty()
    );

    let errors = validator.validate(&json!({"evenNumber": 3, "phoneNumber": "123"}));
    assert_eq!(errors_for(&errors, "evenNumber"), ["Must be an even number"]);
    assert_eq!(errors_for(&errors, "phoneNumber"), ["Invalid phone number"]);
}

#[test]
fn test_age_out_of_range() {
    let mut validator = Validator::new();
    validator.field("age").number().min(18).max(65);

    assert_eq!(
        validator.validate(&json!({"age": 70})),
        vec![ValidationError::new("age", vec![messages::max(65.0)])]
    );
}

#[test]
fn test_missing_required_string() {
    let mut validator = Validator::new();
    validator.field("name").required().string();

    assert_eq!(
        validator.validate(&json!({})),
        vec![ValidationError::new(
            "name",
            vec![
                "This field is required".to_string(),
                "This field must be a string".to_string()
            ],
        )]
    );
}

#[test]
fn test_enum_membership() {
    let mut validator = Validator::new();
    validator.field("letter").one_of(["a", "b"]);

    assert_eq!(
        errors_for(&validator.validate(&json!({"letter": "c"})), "letter"),
        [messages::ENUM]
    );
    assert!(validator.validate(&json!({"letter": "a"})).is_empty());
}

#[test]
fn test_min_on_short_string() {
    let mut validator = Validator::new();
    validator.field("code").min(5);

    assert_eq!(
        errors_for(&validator.validate(&json!({"code": "abc"})), "code"),
        [messages::min(5.0)]
    );
}

#[test]
fn test_ordering_law() {
    let mut validator = Validator::new();
    validator
        .field("x")
        .add_rule("r1", "r1 failed", |_: &Value| false)
        .add_rule("r2", "r2 failed", |_: &Value| true)
        .add_rule("r3", "r3 failed", |_: &Value| Verdict::Fail);

    assert_eq!(
        errors_for(&validator.validate(&json!({"x": 1})), "x"),
        ["r1 failed", "r3 failed"]
    );
}

#[test]
fn test_full_catalog_on_valid_record() {
    let mut validator = Validator::new();
    configure!(validator, {
        "username" => |f| f.required().string().length(3, Some(16)).lowercase().alphanumeric(),
        "code" => |f| f.uppercase().no_whitespace(),
        "homepage" => |f| f.url(),
        "contact" => |f| f.trim().email(),
        "born" => |f| f.date(),
        "zip" => |f| f.pattern(regex::Regex::new(r"^\d{5}$").unwrap()),
        "active" => |f| f.boolean(),
    });

    let record = json!({
        "username": "rose42",
        "code": "AB-12",
        "homepage": "https://example.com/about",
        "contact": "rose@example.com",
        "born": "1990-05-17",
        "zip": "53000",
        "active": false,
    });
    assert!(validator.validate(&record).is_empty());
}

#[test]
fn test_hash_map_input() {
    let mut validator = Validator::new();
    validator.field("name").required();
    validator.field("count").number();

    let mut data: HashMap<String, Value> = HashMap::new();
    data.insert("count".to_string(), json!("seven"));

    let errors = validator.validate(&data);
    assert_eq!(errors_for(&errors, "name"), [messages::REQUIRED]);
    assert_eq!(errors_for(&errors, "count"), [messages::NUMBER]);
}

#[test]
fn test_check_returns_collection() {
    let mut validator = Validator::new();
    validator.field("email").required().email();

    let errors = validator
        .check(&json!({"email": "nope"}))
        .expect_err("email is malformed");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.to_json()["errors"][0]["field"], "email");
}

#[tokio::test]
async fn test_parallel_on_wide_record() {
    let mut validator = Validator::new();
    let mut record = serde_json::Map::new();
    for i in 0..200 {
        let name = format!("field_{}", i);
        validator.field(name.as_str()).required().string().max(8);
        if i % 3 != 0 {
            record.insert(name, json!(if i % 2 == 0 { "short" } else { "much too long" }));
        }
    }

    let sequential = validator.validate(&record);
    let parallel = validator.validate_parallel(&record).await.unwrap();
    assert_eq!(parallel, sequential);
    assert!(!parallel.is_empty());
}
