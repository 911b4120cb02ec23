//! Loading tables from two-column text files.
//!
//! Each non-blank line holds an argument and a value separated by
//! whitespace. Lines whose first non-blank character is `#` are comments.
//!
//! ```text
//! # wavelength  throughput
//! 350.0   0.02
//! 400.0   0.41
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::table::errors::TableError;
use crate::table::interpolant::Interpolant;
use crate::table::lookup::Table;

/// Parses `(args, vals)` columns from `reader`.
///
/// # Errors
/// - [`TableError::Parse`] for a line without exactly two numeric columns
/// - [`TableError::Io`] if reading fails
pub fn read_columns<R: BufRead>(reader: R) -> Result<(Vec<f64>, Vec<f64>), TableError> {
    parse_columns(reader, "<reader>")
}

fn parse_columns<R: BufRead>(reader: R, source: &str) -> Result<(Vec<f64>, Vec<f64>), TableError> {
    let mut args = Vec::new();
    let mut vals = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| TableError::Io {
            path: source.to_string(),
            source: source_err,
        })?;
        let lineno = idx + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(TableError::Parse {
                line: lineno,
                reason: format!("expected 2 columns, found {}", fields.len()),
            });
        }

        let parse = |s: &str| {
            s.parse::<f64>().map_err(|e| TableError::Parse {
                line: lineno,
                reason: format!("invalid number {s:?}: {e}"),
            })
        };
        args.push(parse(fields[0])?);
        vals.push(parse(fields[1])?);
    }

    Ok((args, vals))
}

impl Table {
    /// Builds a table from a two-column text file.
    pub fn from_file<P: AsRef<Path>>(path: P, interpolant: Interpolant) -> Result<Self, TableError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: display.clone(),
            source,
        })?;

        let (args, vals) = parse_columns(BufReader::new(file), &display)?;
        let table = Table::new(&args, &vals, interpolant)?;
        info!("loaded {} entries from {display}", table.len());
        Ok(table)
    }
}
