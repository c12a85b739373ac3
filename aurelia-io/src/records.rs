//! Labeled sequence-record extraction from loosely structured text.
//!
//! A record starts on any line containing its label (substring match
//! against the upper-cased line), begins after that line's last `:`, may
//! span further lines, and ends at the first `X` terminator. Label
//! matching is deliberately containment-based, mirroring the input
//! format this tool consumes: a label occurring inside unrelated text
//! will match.

use aurelia_core::{AureliaError, Result};

use aurelia_align::Nucleotide;

/// Sentinel marking the end of a sequence record.
pub const TERMINATOR: char = 'X';

const FIELD_SEPARATOR: char = ':';

/// Extract the two labeled sequence records from `text` in one pass.
///
/// Lines are upper-cased before matching; blank lines and lines starting
/// with `#` are skipped. `label_a` is tested before `label_b` on every
/// line. Lines consumed as a record body are never re-scanned; a later
/// line matching a label again re-extracts and replaces that record.
///
/// # Errors
///
/// Returns [`AureliaError::MissingSequence`] when a record never appears
/// or the input ends before its terminator, and a parse error for any
/// non-whitespace symbol outside the A, C, G, T alphabet in a record
/// body.
pub fn extract_sequences(
    text: &str,
    label_a: &str,
    label_b: &str,
) -> Result<(Vec<Nucleotide>, Vec<Nucleotide>)> {
    let mut seq_a: Option<Vec<Nucleotide>> = None;
    let mut seq_b: Option<Vec<Nucleotide>> = None;
    let mut lines = text.lines();

    while let Some(raw) = lines.next() {
        let line = raw.to_uppercase();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.contains(label_a) {
            seq_a = Some(read_record(line, &mut lines, label_a)?);
        } else if line.contains(label_b) {
            seq_b = Some(read_record(line, &mut lines, label_b)?);
        }
    }

    match (seq_a, seq_b) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(AureliaError::MissingSequence(format!(
            "no record matched label '{label_a}'"
        ))),
        (_, None) => Err(AureliaError::MissingSequence(format!(
            "no record matched label '{label_b}'"
        ))),
    }
}

/// Accumulate one record's body up to its terminator and decode it.
fn read_record(first: String, lines: &mut std::str::Lines<'_>, label: &str) -> Result<Vec<Nucleotide>> {
    let mut body = match first.rfind(FIELD_SEPARATOR) {
        Some(pos) => first[pos + 1..].to_string(),
        None => first,
    };

    while !body.contains(TERMINATOR) {
        match lines.next() {
            Some(next) => body.push_str(&next.to_uppercase()),
            None => {
                return Err(AureliaError::MissingSequence(format!(
                    "record '{label}' never reaches its '{TERMINATOR}' terminator"
                )));
            }
        }
    }
    if let Some(pos) = body.find(TERMINATOR) {
        body.truncate(pos);
    }

    let mut seq = Vec::with_capacity(body.len());
    for c in body.chars() {
        if c.is_whitespace() {
            continue;
        }
        match Nucleotide::from_char(c) {
            Some(n) => seq.push(n),
            None => {
                return Err(AureliaError::Parse(format!(
                    "unexpected symbol '{c}' in record '{label}'"
                )));
            }
        }
    }
    log::debug!("extracted {} nucleotides for record '{label}'", seq.len());
    Ok(seq)
}
