//! Run configuration parsed from a `key=value` file.
//!
//! All whitespace is stripped from each line before parsing; blank lines
//! and lines starting with `#` are skipped. Unknown keys, lines without
//! `=`, and empty values are errors naming the offending line. The parsed
//! [`Config`] is an explicit immutable value passed to the rest of the
//! pipeline; nothing here touches process-global state.

use std::path::PathBuf;

use aurelia_core::{AureliaError, Result};

/// Default output wrap width when `maxColumns` is not given.
pub const DEFAULT_MAX_COLUMNS: usize = 80;

/// One alignment run's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File holding the two labeled sequence records.
    pub sequence_input_file: PathBuf,
    /// Label identifying sequence A's record.
    pub sequence_a: String,
    /// Label identifying sequence B's record.
    pub sequence_b: String,
    /// File holding the 4x4 substitution-weight table.
    pub weight_matrix_file: PathBuf,
    /// File holding the four per-nucleotide gap penalties.
    pub gap_penalty_file: PathBuf,
    /// Output wrap width in characters.
    pub max_columns: usize,
    /// Write the report to `output_file` instead of stdout.
    pub write_to_file: bool,
    /// Report destination when `write_to_file` is set.
    pub output_file: Option<PathBuf>,
    /// Raise logging to debug level.
    pub debug_mode: bool,
}

/// Parse a configuration from `key=value` text.
///
/// # Errors
///
/// Returns a parse error for an unknown key, a line without `=`, an
/// empty value (`outputFile` excepted), a non-positive `maxColumns`, a
/// missing required key, or `writeToFile=true` without an `outputFile`.
///
/// # Examples
///
/// ```
/// # use aurelia_io::config::parse_config;
/// let input = "sequenceInputFile=seqs.txt\n\
///              sequenceA=SEQUENCEA\n\
///              sequenceB=SEQUENCEB\n\
///              weightMatrixFile=weights.txt\n\
///              gapPenaltyFile=gaps.txt\n";
/// let config = parse_config(input).unwrap();
/// assert_eq!(config.max_columns, 80);
/// assert!(!config.write_to_file);
/// ```
pub fn parse_config(input: &str) -> Result<Config> {
    let mut sequence_input_file: Option<PathBuf> = None;
    let mut sequence_a: Option<String> = None;
    let mut sequence_b: Option<String> = None;
    let mut weight_matrix_file: Option<PathBuf> = None;
    let mut gap_penalty_file: Option<PathBuf> = None;
    let mut max_columns = DEFAULT_MAX_COLUMNS;
    let mut write_to_file = false;
    let mut output_file: Option<PathBuf> = None;
    let mut debug_mode = false;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| {
            AureliaError::Parse(format!("invalid line at {line_no}: expected key=value"))
        })?;

        match key {
            "sequenceInputFile" => {
                sequence_input_file = Some(PathBuf::from(non_empty(value, key, line_no)?));
            }
            "sequenceA" => sequence_a = Some(non_empty(value, key, line_no)?),
            "sequenceB" => sequence_b = Some(non_empty(value, key, line_no)?),
            "weightMatrixFile" => {
                weight_matrix_file = Some(PathBuf::from(non_empty(value, key, line_no)?));
            }
            "gapPenaltyFile" => {
                gap_penalty_file = Some(PathBuf::from(non_empty(value, key, line_no)?));
            }
            "maxColumns" => {
                let text = non_empty(value, key, line_no)?;
                max_columns = text.parse().map_err(|_| {
                    AureliaError::Parse(format!(
                        "invalid maxColumns '{text}' at line {line_no}"
                    ))
                })?;
                if max_columns == 0 {
                    return Err(AureliaError::InvalidInput(
                        "maxColumns must be positive".to_string(),
                    ));
                }
            }
            "writeToFile" => write_to_file = non_empty(value, key, line_no)? == "true",
            "outputFile" => {
                // The only key allowed an empty value; required later
                // only when writeToFile is set.
                output_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "debugMode" => debug_mode = non_empty(value, key, line_no)? == "true",
            _ => {
                return Err(AureliaError::Parse(format!(
                    "unknown option '{key}' at line {line_no}"
                )));
            }
        }
    }

    let config = Config {
        sequence_input_file: require(sequence_input_file, "sequenceInputFile")?,
        sequence_a: require(sequence_a, "sequenceA")?,
        sequence_b: require(sequence_b, "sequenceB")?,
        weight_matrix_file: require(weight_matrix_file, "weightMatrixFile")?,
        gap_penalty_file: require(gap_penalty_file, "gapPenaltyFile")?,
        max_columns,
        write_to_file,
        output_file,
        debug_mode,
    };

    if config.write_to_file && config.output_file.is_none() {
        return Err(AureliaError::Parse(
            "writeToFile is set but no outputFile was given".to_string(),
        ));
    }

    Ok(config)
}

fn non_empty(value: &str, key: &str, line_no: usize) -> Result<String> {
    if value.is_empty() {
        return Err(AureliaError::Parse(format!(
            "incomplete option '{key}' at line {line_no}"
        )));
    }
    Ok(value.to_string())
}

fn require<T>(value: Option<T>, key: &str) -> Result<T> {
    value.ok_or_else(|| AureliaError::Parse(format!("missing required option '{key}'")))
}
