//! Loaders for the substitution-weight and gap-penalty flat files.
//!
//! Both formats are line-oriented: blank lines and lines starting with
//! `#` are skipped, and every remaining line is whitespace-delimited
//! numeric fields.

use aurelia_core::{AureliaError, Result};

use aurelia_align::{GapPenalties, WeightMatrix, ALPHABET_SIZE};

/// Parse a substitution-weight table.
///
/// Each data line is one matrix row in A, C, G, T column order; the rows
/// are likewise in A, C, G, T order.
///
/// # Errors
///
/// Returns a parse error for a non-numeric field (naming the line) and an
/// invalid-input error unless the collected table is exactly 4x4.
pub fn parse_weight_matrix(input: &str) -> Result<WeightMatrix> {
    let mut rows = Vec::with_capacity(ALPHABET_SIZE);
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        rows.push(parse_fields(line, index + 1)?);
    }
    WeightMatrix::from_rows(&rows)
}

/// Parse the per-nucleotide gap penalties.
///
/// Each data line must carry at least four numeric fields; the first four
/// are taken in A, C, G, T order. A later data line overwrites an earlier
/// one.
///
/// # Errors
///
/// Returns a parse error for a non-numeric field, a data line with fewer
/// than four fields, or a file with no data lines at all.
pub fn parse_gap_penalties(input: &str) -> Result<GapPenalties> {
    let mut latest: Option<[f64; ALPHABET_SIZE]> = None;
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;
        let fields = parse_fields(line, line_no)?;
        if fields.len() < ALPHABET_SIZE {
            return Err(AureliaError::Parse(format!(
                "expected {ALPHABET_SIZE} gap penalties at line {line_no}, found {}",
                fields.len()
            )));
        }
        latest = Some([fields[0], fields[1], fields[2], fields[3]]);
    }
    latest
        .map(GapPenalties::new)
        .ok_or_else(|| AureliaError::Parse("gap penalty file contains no values".to_string()))
}

fn parse_fields(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                AureliaError::Parse(format!("invalid number '{token}' at line {line_no}"))
            })
        })
        .collect()
}
