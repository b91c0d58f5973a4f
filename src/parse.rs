//! Literal parsers for the numeric, human-size and month comparison modes

use std::cmp::Ordering;

/// Value of one numeric comparison tier for a line.
///
/// `NotApplicable` marks a column the active parser did not recognize. It is
/// never equal to any recognized value and always orders after them within
/// its tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Recognized(f64),
    NotApplicable,
}

impl NumericValue {
    /// Wrap a parsed float; NaN collapses into `NotApplicable` so that every
    /// recognized value stays totally comparable.
    fn from_parsed(value: f64) -> Self {
        if value.is_nan() {
            NumericValue::NotApplicable
        } else {
            NumericValue::Recognized(value)
        }
    }

    /// Check whether this tier carries a recognized value
    pub fn is_recognized(&self) -> bool {
        matches!(self, NumericValue::Recognized(_))
    }

    /// Order two tier values: recognized before not-applicable, numeric
    /// order among recognized values.
    pub fn tier_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NumericValue::Recognized(a), NumericValue::Recognized(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (NumericValue::Recognized(_), NumericValue::NotApplicable) => Ordering::Less,
            (NumericValue::NotApplicable, NumericValue::Recognized(_)) => Ordering::Greater,
            (NumericValue::NotApplicable, NumericValue::NotApplicable) => Ordering::Equal,
        }
    }
}

/// Parse `s` as a plain floating-point number (sign, decimal point and
/// exponent supported). Surrounding whitespace is ignored; empty or
/// unparsable input is `NotApplicable`.
pub fn parse_number(s: &str) -> NumericValue {
    let s = s.trim();
    if s.is_empty() {
        return NumericValue::NotApplicable;
    }

    match s.parse::<f64>() {
        Ok(value) => NumericValue::from_parsed(value),
        Err(_) => NumericValue::NotApplicable,
    }
}

/// Parse values like 10K, 2M, 3G, 4T, 5P, 6E (binary powers of 1024).
///
/// A `B` is allowed after a unit letter (e.g. 10KB); suffix case does not
/// matter and surrounding whitespace is ignored. A bare `B` is not stripped,
/// so `5B` carries suffix `B`, which is not in the multiplier table and the
/// value is therefore not recognized.
pub fn parse_human_size(s: &str) -> NumericValue {
    let s = s.trim();
    if s.is_empty() {
        return NumericValue::NotApplicable;
    }

    // Split off the trailing run of letters as the suffix.
    let bytes = s.as_bytes();
    let mut split = bytes.len();
    while split > 0 && bytes[split - 1].is_ascii_alphabetic() {
        split -= 1;
    }
    let (base, suffix) = s.split_at(split);

    let value = match base.parse::<f64>() {
        Ok(value) => value,
        Err(_) => return NumericValue::NotApplicable,
    };

    let mut suffix = suffix.to_ascii_uppercase();
    if suffix.len() > 1 && suffix.ends_with('B') {
        suffix.pop();
    }

    let multiplier = match suffix.as_str() {
        "" => 1.0,
        "K" => 1024.0,
        "M" => 1024.0 * 1024.0,
        "G" => 1024.0 * 1024.0 * 1024.0,
        "T" => 1024f64.powi(4),
        "P" => 1024f64.powi(5),
        "E" => 1024f64.powi(6),
        _ => return NumericValue::NotApplicable, // unknown suffix
    };

    NumericValue::from_parsed(value * multiplier)
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Recognize a three-letter month abbreviation, case-insensitively.
///
/// Only the first three characters are inspected, so full month names like
/// `January` match too. Shorter strings and non-matching prefixes yield
/// `None`.
pub fn parse_month(s: &str) -> Option<u32> {
    let prefix = s.as_bytes().get(..3)?;

    MONTHS
        .iter()
        .position(|m| prefix.eq_ignore_ascii_case(m.as_bytes()))
        .map(|i| i as u32 + 1)
}
