//! Configuration management for sort operations

use crate::error::{SortError, SortResult};

/// Main configuration structure for sort operations
///
/// The three comparison-mode flags are not mutually exclusive in storage;
/// conflicts resolve through the fixed dominance hierarchy
/// month > human-numeric > numeric, applied at key construction.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Column to sort by (1-based); 0 selects the whole line
    pub column: usize,
    /// Column separator used when `column` > 0
    pub delimiter: String,
    /// Compare according to string numerical value
    pub numeric: bool,
    /// Compare human readable sizes (e.g. 2K 1G)
    pub human_numeric: bool,
    /// Compare by month names (Jan..Dec)
    pub month: bool,
    /// Reverse the result of comparisons
    pub reverse: bool,
    /// Output only the first of an equal run
    pub unique: bool,
    /// Trim trailing blanks before comparing and emitting
    pub ignore_trailing_blanks: bool,
    /// Output file path (stdout when None)
    pub output_file: Option<String>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            column: 0,
            delimiter: "\t".to_string(),
            numeric: false,
            human_numeric: false,
            month: false,
            reverse: false,
            unique: false,
            ignore_trailing_blanks: false,
            output_file: None,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column to sort by (0 = whole line)
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the column separator
    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    /// Enable numeric comparison
    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    /// Enable human-readable size comparison
    pub fn with_human_numeric(mut self, human_numeric: bool) -> Self {
        self.human_numeric = human_numeric;
        self
    }

    /// Enable month-name comparison
    pub fn with_month(mut self, month: bool) -> Self {
        self.month = month;
        self
    }

    /// Enable reverse sorting
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Enable unique output
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Enable trailing-blank trimming
    pub fn with_ignore_trailing_blanks(mut self, ignore: bool) -> Self {
        self.ignore_trailing_blanks = ignore;
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.delimiter.is_empty() {
            return Err(SortError::invalid_field_separator(
                "separator must not be empty",
            ));
        }

        Ok(())
    }

    /// Check if any numeric comparison mode is enabled
    pub fn numeric_sort(&self) -> bool {
        self.numeric || self.human_numeric
    }

    /// Check if the whole line is used as the key
    pub fn whole_line(&self) -> bool {
        self.column == 0
    }
}
