//! Column extraction for field-based sorting

/// Extract the `column`-th field (1-based) from `line`, split on `delimiter`.
///
/// Column 0 selects the whole line; column 1 is the prefix before the first
/// separator (or the whole line when no separator occurs). Requesting a
/// column past the last separator yields the unterminated remainder;
/// requesting one further out yields the empty string. Never fails.
pub fn extract<'a>(line: &'a str, column: usize, delimiter: &str) -> &'a str {
    if column <= 1 {
        if column == 1 {
            if let Some(idx) = line.find(delimiter) {
                return &line[..idx];
            }
        }

        return line;
    }

    // Single left-to-right scan, no allocation.
    let mut start = 0;
    let mut seen = 1;

    loop {
        match line[start..].find(delimiter) {
            None => {
                return if seen == column { &line[start..] } else { "" };
            }
            Some(idx) => {
                if seen == column {
                    return &line[start..start + idx];
                }

                start += idx + delimiter.len();
                seen += 1;
            }
        }
    }
}
