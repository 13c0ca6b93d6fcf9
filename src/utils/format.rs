//! Number and value display compatible with how JavaScript renders them.
//!
//! Menu data arrives as loosely-typed JSON, and receipts/descriptions must
//! print prices and items exactly like a browser would (`250`, `250.5`,
//! `"152.57"` for a two-place rounding). These helpers keep that behaviour in
//! one place.

use serde_json::Value;

/// Number → text, the way `String(n)` does.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 也顯示為 "0"
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// `Number.prototype.toFixed`: exactly `digits` decimals, rounding the exact
/// binary value half away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return js_number(value);
    }

    // 每個有限 f64 的十進位展開最多 1074 位小數
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut buf: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in buf.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            buf.insert(0, b'1');
        }
    }

    let split = buf.len() - digits;
    let (whole, fraction) = buf.split_at(split);
    let mut out = String::with_capacity(buf.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(whole));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(fraction));
    }
    out
}

/// Any value → text, the way `String(v)` / template literals render it.
pub fn js_display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => js_number(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => s.clone(),
        Value::Array(items) => js_join(items, ","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `Array.prototype.join`: null elements become empty text.
pub fn js_join(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => js_display(other),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// `Number(v)` coercion. Objects and unparseable text become NaN.
pub fn js_to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => js_text_to_number(s),
        Value::Array(_) => js_text_to_number(&js_display(value)),
        Value::Object(_) => f64::NAN,
    }
}

fn js_text_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust 的 f64 解析接受 "inf"/"nan"，JavaScript 不接受
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_js_number_display() {
        assert_eq!(js_number(250.0), "250");
        assert_eq!(js_number(250.5), "250.5");
        assert_eq!(js_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(1.5e-7), "1.5e-7");
        assert_eq!(js_number(f64::NAN), "NaN");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_to_fixed_rounding() {
        assert_eq!(to_fixed(250.0, 2), "250.00");
        assert_eq!(to_fixed(152.567, 2), "152.57");
        assert_eq!(to_fixed(152.567, 0), "153");
        // 1.005 實際上是 1.00499999...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(0.5, 3), "0.500");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_js_display_and_join() {
        assert_eq!(js_display(&json!("dal")), "dal");
        assert_eq!(js_display(&json!(12)), "12");
        assert_eq!(js_display(&json!(null)), "null");
        assert_eq!(js_display(&json!({"a": 1})), "[object Object]");
        assert_eq!(js_join(&[json!("a"), json!(null), json!(2)], ", "), "a, , 2");
        assert_eq!(js_display(&json!(["x", ["y", "z"]])), "x,y,z");
    }

    #[test]
    fn test_js_to_number() {
        assert_eq!(js_to_number(&json!("15")), 15.0);
        assert_eq!(js_to_number(&json!(" 8 ")), 8.0);
        assert_eq!(js_to_number(&json!("")), 0.0);
        assert_eq!(js_to_number(&json!(null)), 0.0);
        assert_eq!(js_to_number(&json!(true)), 1.0);
        assert_eq!(js_to_number(&json!("0x10")), 16.0);
        assert_eq!(js_to_number(&json!([7])), 7.0);
        assert!(js_to_number(&json!("abc")).is_nan());
        assert!(js_to_number(&json!("inf")).is_nan());
        assert!(js_to_number(&json!({})).is_nan());
    }
}
