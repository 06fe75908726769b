//! Configure whole records at once and validate them concurrently.
//!
//! Run with: `cargo run -p fieldcheck-validation --example batch_fields`

use chrono::{DateTime, Datelike, Utc};
use fieldcheck_validation::{Result, Validator, configure, create_validator};
use regex::Regex;
use serde_json::{Value, json};

fn planted_in_past(value: &Value) -> bool {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .is_some_and(|planted| planted < Utc::now())
}

fn flower_validator() -> Result<Validator> {
    let hex_color = Regex::new(r"(?i)^#[0-9A-F]{6}$")?;

    let mut validator = create_validator();
    configure!(validator, {
        "name" => |f| f
            .required().with_message("Flower name is required")
            .string().with_message("Flower name must be a string")
            .alphanumeric().with_message("Flower name must be alphanumeric")
            .lowercase().with_message("Flower name must be in lowercase")
            .length(3, Some(50)).with_message("Flower name must be between 3 and 50 characters"),
        "petals" => |f| f
            .required().with_message("Number of petals is required")
            .number().with_message("Number of petals must be a number")
            .min(1).with_message("Number of petals must be at least 1")
            .max(100).with_message("Number of petals must be at most 100"),
        "color" => |f| f
            .required().with_message("Color is required")
            .string().with_message("Color must be a string")
            .pattern(hex_color).with_message("Color must be a valid hex code"),
        "species" => |f| f
            .required().with_message("Species is required")
            .string().with_message("Species must be a string"),
        "bloomingSeason" => |f| f
            .required().with_message("Blooming season is required")
            .one_of(["spring", "summer", "autumn", "winter"])
            .with_message("Invalid blooming season"),
        "isFragrant" => |f| f.boolean().with_message("isFragrant must be a boolean"),
        "plantedDate" => |f| f
            .required().with_message("Planted date is required")
            .date().with_message("Planted date must be a valid date")
            .custom(planted_in_past).with_message("Planted date must be in the past"),
        "website" => |f| f.url().with_message("Website must be a valid URL"),
    });
    Ok(validator)
}

fn garden_validator() -> Validator {
    let this_year = Utc::now().year();

    let mut validator = create_validator();
    configure!(validator, {
        "name" => |f| f
            .required().with_message("Garden name is required")
            .string().with_message("Garden name must be a string")
            .alphanumeric().with_message("Garden name must be alphanumeric")
            .uppercase().with_message("Garden name must be in uppercase")
            .length(5, Some(100)).with_message("Garden name must be between 5 and 100 characters"),
        "location" => |f| f
            .required().with_message("Location is required")
            .string().with_message("Location must be a string"),
        "establishedYear" => |f| f
            .required().with_message("Established year is required")
            .number().with_message("Established year must be a number")
            .min(1900).with_message("Established year must be no earlier than 1900")
            .max(this_year).with_message("Established year cannot be in the future"),
        "website" => |f| f.url().with_message("Website must be a valid URL"),
        "isPublic" => |f| f.boolean().with_message("isPublic must be a boolean"),
    });
    validator
}

#[tokio::main]
async fn main() -> Result<()> {
    fieldcheck_log::init();

    let flower = json!({
        "name": "rose",
        "petals": 30,
        "color": "#FF5733",
        "species": "rosa",
        "bloomingSeason": "spring",
        "isFragrant": true,
        "plantedDate": "2024-01-01T11:06:07+00:00",
        "website": "https://example.com/flower/rose",
    });

    let garden = json!({
        "name": "MYGARDEN",
        "location": "Quang Nam, Vietnam",
        "establishedYear": 2000,
        "website": "https://example.com/garden/mygarden",
        "isPublic": true,
    });

    let flower_errors = flower_validator()?.validate_parallel(&flower).await?;
    let garden_errors = garden_validator().validate(&garden);

    println!("flower: {}", serde_json::to_string_pretty(&flower_errors)?);
    println!("garden: {}", serde_json::to_string_pretty(&garden_errors)?);

    Ok(())
}
