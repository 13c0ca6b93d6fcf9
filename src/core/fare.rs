use crate::core::FareRange;
use crate::utils::error::{KitError, Result};
use crate::utils::format::{js_to_number, to_fixed};
use crate::utils::validation::validate_range;
use serde_json::Value;

/// Meter reading typed in by a passenger, e.g. `"152.50"`.
pub fn parse_fare(fare: &str) -> Result<f64> {
    let trimmed = fare.trim();
    if trimmed.is_empty() {
        return Err(KitError::invalid_value("fare", fare, "fare text is empty"));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(KitError::invalid_value("fare", fare, "not a number")),
    }
}

pub fn round_fare(amount: f64, decimal_places: usize) -> Result<String> {
    validate_range("decimal_places", decimal_places, 0, 100)?;
    Ok(to_fixed(amount, decimal_places))
}

/// Surge fare, always rounded up.
pub fn calculate_surge(base_fare: f64, surge_multiplier: f64) -> Result<f64> {
    if base_fare.is_nan() || base_fare <= 0.0 {
        return Err(KitError::invalid_value("base_fare", base_fare, "must be positive"));
    }
    if surge_multiplier.is_nan() || surge_multiplier <= 0.0 {
        return Err(KitError::invalid_value(
            "surge_multiplier",
            surge_multiplier,
            "must be positive",
        ));
    }
    Ok((base_fare * surge_multiplier).ceil())
}

pub fn find_cheapest_and_costliest(fares: &[f64]) -> Result<FareRange> {
    let mut valid = fares.iter().copied().filter(|f| !f.is_nan());
    let first = valid.next().ok_or_else(|| KitError::EmptyCollection {
        field: "fares".to_string(),
    })?;

    let range = valid.fold(
        FareRange {
            cheapest: first,
            costliest: first,
        },
        |range, fare| FareRange {
            cheapest: range.cheapest.min(fare),
            costliest: range.costliest.max(fare),
        },
    );
    Ok(range)
}

/// Absolute distance between two km markers, given as numbers or numeric text.
pub fn get_distance_difference(from: &Value, to: &Value) -> Result<f64> {
    let from_km = js_to_number(from);
    let to_km = js_to_number(to);

    if from_km.is_nan() {
        return Err(KitError::invalid_value("from", from, "not a km marker"));
    }
    if to_km.is_nan() {
        return Err(KitError::invalid_value("to", to, "not a km marker"));
    }
    Ok((from_km - to_km).abs())
}
