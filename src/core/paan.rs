use crate::core::FrozenMenu;
use crate::utils::error::{KitError, Result};
use crate::utils::format::{js_number, js_to_number};
use crate::utils::validation::require_object;
use serde_json::{Map, Number, Value};

fn number_value(n: f64) -> Value {
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}

/// New order from a base paan; customization keys win. Inputs are left as-is.
pub fn create_paan_order(base_paan: &Value, customizations: &Value) -> Result<Map<String, Value>> {
    let mut order = require_object("base_paan", base_paan)?.clone();

    match customizations.as_object() {
        Some(extra) => {
            for (key, value) in extra {
                order.insert(key.clone(), value.clone());
            }
        }
        None => tracing::debug!("Customizations are not an object, returning base copy"),
    }
    Ok(order)
}

pub fn freeze_menu(menu: &Value) -> Result<FrozenMenu> {
    Ok(FrozenMenu::new(require_object("menu", menu)?.clone()))
}

/// Adds `increase` to every price, JavaScript `+` style.
///
/// Text prices get the increase appended (`"30"` + 10 → `"3010"`), booleans
/// and null are coerced first, nested lists/objects are copied unchanged.
pub fn update_prices(menu: &Value, increase: f64) -> Result<Map<String, Value>> {
    let menu = require_object("menu", menu)?;

    let updated = menu
        .iter()
        .map(|(key, value)| {
            let next = match value {
                Value::Number(n) => number_value(n.as_f64().unwrap_or(f64::NAN) + increase),
                Value::String(s) => Value::String(format!("{}{}", s, js_number(increase))),
                Value::Bool(_) | Value::Null => number_value(js_to_number(value) + increase),
                Value::Array(_) | Value::Object(_) => value.clone(),
            };
            (key.clone(), next)
        })
        .collect();
    Ok(updated)
}

/// Regular menu overlaid with the day's specials. `null` counts as an empty menu.
pub fn merge_daily_specials(regular_menu: &Value, specials_menu: &Value) -> Result<Map<String, Value>> {
    let regular = menu_or_empty("regular_menu", regular_menu)?;
    let specials = menu_or_empty("specials_menu", specials_menu)?;

    let mut merged = regular;
    merged.extend(specials);
    Ok(merged)
}

fn menu_or_empty(field_name: &str, menu: &Value) -> Result<Map<String, Value>> {
    match menu {
        Value::Null => Ok(Map::new()),
        Value::Object(obj) => Ok(obj.clone()),
        _ => Err(KitError::invalid_record(field_name, "must be an object")),
    }
}
