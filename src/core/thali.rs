use crate::core::{MenuEntry, ThaliRecord, ThaliStats};
use crate::utils::error::Result;
use crate::utils::format::{js_number, to_fixed};
use crate::utils::validation::{require_non_empty_sequence, require_sequence};
use serde_json::Value;

/// One-line menu description of a single thali.
///
/// `"RAJASTHANI THALI (Veg) - Items: dal baati, churma - Rs.250.00"`
pub fn describe(thali: &Value) -> Result<String> {
    let record = ThaliRecord::from_value(thali).inspect_err(|e| {
        tracing::debug!("Rejected thali for description: {}", e);
    })?;
    Ok(record.to_string())
}

/// Counts, price range, average and names over a menu.
///
/// Elements are read as-is: a non-boolean `isVeg` is counted as neither veg
/// nor non-veg, and a price that is not a number turns min/max/average into NaN.
pub fn aggregate_stats(thalis: &Value) -> Result<ThaliStats> {
    let thalis = require_non_empty_sequence("thalis", thalis)?;
    let entries: Vec<MenuEntry<'_>> = thalis.iter().map(MenuEntry::new).collect();

    let veg_count = entries
        .iter()
        .filter(|e| e.veg_flag() == Some(true))
        .count();
    let non_veg_count = entries
        .iter()
        .filter(|e| e.veg_flag() == Some(false))
        .count();

    let prices: Vec<f64> = entries.iter().map(MenuEntry::price).collect();
    let cheapest = fold_nan_aware(&prices, f64::INFINITY, f64::min);
    let costliest = fold_nan_aware(&prices, f64::NEG_INFINITY, f64::max);
    let sum: f64 = prices.iter().sum();
    let avg_price = to_fixed(sum / prices.len() as f64, 2);

    let stats = ThaliStats {
        total_count: entries.len(),
        veg_count,
        non_veg_count,
        cheapest,
        costliest,
        avg_price,
        names: entries.iter().map(MenuEntry::name).collect(),
    };
    tracing::debug!(
        "Aggregated {} thalis (veg: {}, non-veg: {})",
        stats.total_count,
        stats.veg_count,
        stats.non_veg_count
    );
    Ok(stats)
}

// f64::min/max 會忽略 NaN，這裡讓 NaN 傳遞出去
fn fold_nan_aware(values: &[f64], init: f64, pick: fn(f64, f64) -> f64) -> f64 {
    values.iter().fold(init, |acc, &v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            pick(acc, v)
        }
    })
}

/// Case-insensitive substring match against each thali's name and items.
pub fn search<'a>(thalis: &'a Value, query: &str) -> Result<Vec<&'a Value>> {
    let thalis = require_sequence("thalis", Some(thalis))?;
    let needle = query.to_lowercase();

    let matches: Vec<&Value> = thalis
        .iter()
        .filter(|raw| {
            let entry = MenuEntry::new(raw);
            entry.name_text().to_lowercase().contains(&needle)
                || entry
                    .item_texts()
                    .iter()
                    .any(|item| item.to_lowercase().contains(&needle))
        })
        .collect();

    tracing::debug!("Search '{}' matched {} of {} thalis", query, matches.len(), thalis.len());
    Ok(matches)
}

/// Plain-text receipt. Prices are printed as given, without decimal padding.
pub fn generate_receipt(customer_name: &str, thalis: &Value) -> Result<String> {
    let thalis = require_non_empty_sequence("thalis", thalis)?;
    let entries: Vec<MenuEntry<'_>> = thalis.iter().map(MenuEntry::new).collect();

    let line_items = entries
        .iter()
        .map(|e| format!("- {} x Rs.{}", e.name_text(), e.price_text()))
        .collect::<Vec<_>>()
        .join("\n");
    let total: f64 = entries.iter().map(MenuEntry::price).sum();

    Ok(format!(
        "THALI RECEIPT\n---\nCustomer: {}\n{}\n---\nTotal: Rs.{}\nItems: {}",
        customer_name.to_uppercase(),
        line_items,
        js_number(total),
        entries.len()
    ))
}
