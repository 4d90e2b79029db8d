//! Fixed ro-RO display formatting.

use serde_json::Value;

use crate::models::Currency;

/// Format a number the way `ro-RO` does: `.` groups thousands, `,` separates
/// decimals, and at most two fraction digits are kept with trailing zeros
/// dropped.
pub fn format_number(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (int_part, frac) = (cents / 100, cents % 100);

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match frac {
        0 => format!("{sign}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{grouped},{}", f / 10),
        f => format!("{sign}{grouped},{f:02}"),
    }
}

/// `"<amount> <currency>"`, or `"-"` when there is no (non-zero) amount.
pub fn format_currency(amount: Option<f64>, currency: &Currency) -> String {
    match amount {
        Some(a) if a != 0.0 => format!("{} {}", format_number(a), currency),
        _ => "-".to_string(),
    }
}

/// Whether a loosely-typed spec value should be shown at all: null, empty
/// strings, zero and `false` are hidden.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Render a loosely-typed spec value as text.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Heading for a feature category.
pub fn category_name(category: &str) -> String {
    match category {
        "safety" => "Siguranta".to_string(),
        "design" => "Design".to_string(),
        "comfort" => "Confort".to_string(),
        "multimedia" => "Multimedia".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// "1 oferta" / "N oferte".
pub fn offer_count_label(count: usize) -> String {
    if count == 1 {
        "1 oferta".to_string()
    } else {
        format!("{count} oferte")
    }
}
