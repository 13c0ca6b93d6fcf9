use crate::utils::error::{KitError, Result};
use serde_json::{Map, Value};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn require_object<'a>(field_name: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| KitError::invalid_record(field_name, "must be an object"))
}

pub fn require_text<'a>(field_name: &str, value: Option<&'a Value>) -> Result<&'a str> {
    match value {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(KitError::invalid_record(field_name, "must be text")),
        None => Err(KitError::MissingField {
            field: field_name.to_string(),
        }),
    }
}

pub fn require_sequence<'a>(field_name: &str, value: Option<&'a Value>) -> Result<&'a [Value]> {
    match value {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(KitError::NotASequence {
            field: field_name.to_string(),
        }),
    }
}

pub fn require_non_empty_sequence<'a>(field_name: &str, value: &'a Value) -> Result<&'a [Value]> {
    let items = require_sequence(field_name, Some(value))?;
    if items.is_empty() {
        return Err(KitError::EmptyCollection {
            field: field_name.to_string(),
        });
    }
    Ok(items)
}

pub fn require_finite_number(field_name: &str, value: Option<&Value>) -> Result<f64> {
    match value.and_then(Value::as_f64) {
        Some(n) if n.is_finite() => Ok(n),
        Some(_) => Err(KitError::invalid_record(field_name, "must be a finite number")),
        None if value.is_none() => Err(KitError::MissingField {
            field: field_name.to_string(),
        }),
        None => Err(KitError::invalid_record(field_name, "must be a finite number")),
    }
}

pub fn require_boolean(field_name: &str, value: Option<&Value>) -> Result<bool> {
    match value {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(KitError::invalid_record(field_name, "must be a boolean")),
        None => Err(KitError::MissingField {
            field: field_name.to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KitError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KitError::invalid_value(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(KitError::invalid_value(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(KitError::invalid_value(
            field_name,
            value,
            &format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_helpers() {
        let record = json!({"name": "Thali", "items": [], "price": 120.5, "isVeg": false});
        let obj = require_object("thali", &record).unwrap();

        assert_eq!(require_text("name", obj.get("name")).unwrap(), "Thali");
        assert!(require_sequence("items", obj.get("items")).unwrap().is_empty());
        assert_eq!(require_finite_number("price", obj.get("price")).unwrap(), 120.5);
        assert!(!require_boolean("isVeg", obj.get("isVeg")).unwrap());

        assert!(matches!(
            require_text("missing", obj.get("missing")),
            Err(KitError::MissingField { .. })
        ));
        assert!(require_boolean("name", obj.get("name")).is_err());
        assert!(require_object("thali", &json!([1, 2])).is_err());
    }

    #[test]
    fn test_require_non_empty_sequence() {
        assert!(require_non_empty_sequence("thalis", &json!([1])).is_ok());
        assert!(matches!(
            require_non_empty_sequence("thalis", &json!([])),
            Err(KitError::EmptyCollection { .. })
        ));
        assert!(matches!(
            require_non_empty_sequence("thalis", &json!("nope")),
            Err(KitError::NotASequence { .. })
        ));
    }

    #[test]
    fn test_validate_range_and_strings() {
        assert!(validate_range("decimal_places", 2, 0, 100).is_ok());
        assert!(validate_range("decimal_places", 101, 0, 100).is_err());
        assert!(validate_non_empty_string("sender", "Guddu").is_ok());
        assert!(validate_non_empty_string("sender", "   ").is_err());
        assert!(validate_path("menu", "menu.toml").is_ok());
        assert!(validate_path("menu", "").is_err());
    }
}
