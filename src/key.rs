//! Composite sort keys and the mode-dominance comparator

use std::cmp::Ordering;

use crate::config::SortConfig;
use crate::field;
use crate::parse::{self, NumericValue};

/// Preprocessed form of one input line for comparison.
///
/// At most one of `human`/`num` is populated per configuration (human wins
/// when both modes are requested); `month` is filled independently whenever
/// month mode is on. `text` is always present as the universal fallback and
/// the last comparison tier before the original input index.
#[derive(Debug, Clone)]
pub struct LineKey {
    /// Calendar month 1..=12, `None` when unrecognized or month mode is off
    pub month: Option<u32>,
    /// Human-readable size value
    pub human: NumericValue,
    /// Plain numeric value
    pub num: NumericValue,
    /// String key; trailing blanks may be trimmed
    pub text: String,
}

impl LineKey {
    /// Derive the key for a single line under `config`.
    pub fn build(line: &str, config: &SortConfig) -> Self {
        let mut col = if config.column > 0 {
            field::extract(line, config.column, &config.delimiter)
        } else {
            line
        };

        if config.ignore_trailing_blanks {
            col = col.trim_end_matches(|c| c == ' ' || c == '\t');
        }

        let month = if config.month {
            parse::parse_month(col)
        } else {
            None
        };

        let (human, num) = if config.human_numeric {
            (parse::parse_human_size(col), NumericValue::NotApplicable)
        } else if config.numeric {
            (NumericValue::NotApplicable, parse::parse_number(col))
        } else {
            (NumericValue::NotApplicable, NumericValue::NotApplicable)
        };

        Self {
            month,
            human,
            num,
            text: col.to_string(),
        }
    }
}

/// Build one key per line, order-preserving.
pub fn build_keys(lines: &[String], config: &SortConfig) -> Vec<LineKey> {
    lines
        .iter()
        .map(|line| LineKey::build(line, config))
        .collect()
}

/// Compare two keys tier by tier; the first decisive tier wins.
///
/// Priority order: month > human > num > text. Within the month and numeric
/// tiers a recognized value orders before an unrecognized one; ties fall
/// through to the next tier. Full-key ties are left to the caller, which
/// breaks them with the original input index.
pub fn compare_keys(a: &LineKey, b: &LineKey) -> Ordering {
    let by_month = match (a.month, b.month) {
        (Some(am), Some(bm)) => am.cmp(&bm),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_month
        .then_with(|| a.human.tier_cmp(&b.human))
        .then_with(|| a.num.tier_cmp(&b.num))
        .then_with(|| a.text.cmp(&b.text))
}
