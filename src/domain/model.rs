use crate::utils::error::Result;
use crate::utils::format::{js_display, js_join, js_to_number, to_fixed};
use crate::utils::validation::{
    require_boolean, require_finite_number, require_object, require_sequence, require_text,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A thali that passed shape validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThaliRecord {
    pub name: String,
    /// Item display text, in menu order.
    pub items: Vec<String>,
    pub price: f64,
    pub is_veg: bool,
}

impl ThaliRecord {
    /// 驗證 name/items/price/isVeg 的型別後建立記錄
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = require_object("thali", value)?;
        let name = require_text("name", obj.get("name"))?;
        let items = require_sequence("items", obj.get("items"))?;
        let price = require_finite_number("price", obj.get("price"))?;
        let is_veg = require_boolean("isVeg", obj.get("isVeg"))?;

        Ok(Self {
            name: name.to_string(),
            items: items
                .iter()
                .map(|item| js_join(std::slice::from_ref(item), ""))
                .collect(),
            price,
            is_veg,
        })
    }

    pub fn veg_label(&self) -> &'static str {
        if self.is_veg {
            "Veg"
        } else {
            "Non-Veg"
        }
    }
}

impl<'a> TryFrom<&'a Value> for ThaliRecord {
    type Error = crate::utils::error::KitError;

    fn try_from(value: &'a Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl fmt::Display for ThaliRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Items: {} - Rs.{}",
            self.name.to_uppercase(),
            self.veg_label(),
            self.items.join(", "),
            to_fixed(self.price, 2)
        )
    }
}

/// Unvalidated view over one element of a menu collection.
///
/// Aggregate operations read elements through this view and never reject
/// them; missing or odd fields degrade the way loose data would.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry<'a> {
    raw: &'a Value,
}

impl<'a> MenuEntry<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.raw.as_object().and_then(|obj| obj.get(key))
    }

    /// Raw `name`, `null` when absent.
    pub fn name(&self) -> Value {
        self.field("name").cloned().unwrap_or(Value::Null)
    }

    pub fn name_text(&self) -> String {
        self.field("name")
            .map(js_display)
            .unwrap_or_else(|| "undefined".to_string())
    }

    pub fn item_texts(&self) -> Vec<String> {
        match self.field("items") {
            Some(Value::Array(items)) => items.iter().map(js_display).collect(),
            _ => Vec::new(),
        }
    }

    /// Price coerced to a number; NaN when absent or unparseable.
    pub fn price(&self) -> f64 {
        self.field("price").map(js_to_number).unwrap_or(f64::NAN)
    }

    pub fn price_text(&self) -> String {
        self.field("price")
            .map(js_display)
            .unwrap_or_else(|| "undefined".to_string())
    }

    /// `Some` only for a strict boolean flag.
    pub fn veg_flag(&self) -> Option<bool> {
        self.field("isVeg").and_then(Value::as_bool)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThaliStats {
    pub total_count: usize,
    pub veg_count: usize,
    pub non_veg_count: usize,
    pub cheapest: f64,
    pub costliest: f64,
    pub avg_price: String,
    pub names: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareRange {
    pub cheapest: f64,
    pub costliest: f64,
}

/// Menu that can be read but never changed once frozen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrozenMenu {
    entries: Map<String, Value>,
}

impl FrozenMenu {
    pub(crate) fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy out a mutable map; the frozen menu itself stays untouched.
    pub fn to_map(&self) -> Map<String, Value> {
        self.entries.clone()
    }
}
