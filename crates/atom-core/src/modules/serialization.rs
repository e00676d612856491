use crate::domain::{AtomError, AtomResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

const MINUS_SIGN: char = '\u{2212}';
const NOT_AVAILABLE: &str = "N/A";
const MAX_FRACTION_DIGITS: usize = 3;

/// `"Neutral"`, `"2+"` or `"1−"` (U+2212 minus sign).
pub fn format_ion_charge(charge: i64) -> String {
    if charge == 0 {
        return "Neutral".to_string();
    }
    let sign = if charge > 0 { '+' } else { MINUS_SIGN };
    format!("{}{}", charge.unsigned_abs(), sign)
}

/// Grouped number with at most three fraction digits followed by `unit`;
/// `"N/A"` for missing values.
pub fn format_value_with_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{} {}", format_grouped_number(value), unit)
            .trim()
            .to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_grouped_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (integer != "0" || !fraction.is_empty());
    let mut formatted = String::new();
    if negative {
        formatted.push('-');
    }
    formatted.push_str(&grouped);
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> AtomResult<String> {
    serde_json::to_string_pretty(value).map_err(|error| {
        AtomError::internal(
            "RUN.JSON_RENDER",
            format!("failed to render JSON output: {}", error),
        )
    })
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, normalize_text_artifact(content))
}
