//! Line input for the sort boundary layer

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::error::{SortContext, SortError, SortResult};

/// Read all lines from the named files, in order.
///
/// With no files given, reads stdin; the special name `-` also selects
/// stdin. Lines are split on `\n` and trailing carriage returns are
/// stripped. Reading zero lines overall is an error.
pub fn read_lines(files: &[String]) -> SortResult<Vec<String>> {
    let mut lines = Vec::new();

    if files.is_empty() {
        read_from(io::stdin().lock(), &mut lines)?;
    } else {
        for path in files {
            if path == "-" {
                read_from(io::stdin().lock(), &mut lines)?;
            } else {
                let file = File::open(path).with_file_context(path)?;
                read_from(BufReader::new(file), &mut lines)?;
            }
        }
    }

    if lines.is_empty() {
        return Err(SortError::EmptyInput);
    }

    Ok(lines)
}

fn read_from<R: BufRead>(reader: R, out: &mut Vec<String>) -> SortResult<()> {
    for line in reader.lines() {
        let mut line = line?;
        let trimmed = line.trim_end_matches('\r').len();
        line.truncate(trimmed);
        out.push(line);
    }

    Ok(())
}
