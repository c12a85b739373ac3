//! File-format boundary for the Aurelia toolkit: run configuration,
//! weight/gap table loading, labeled sequence-record extraction, and
//! alignment report output.

pub mod config;
pub mod records;
pub mod report;
pub mod tables;

pub use config::{parse_config, Config, DEFAULT_MAX_COLUMNS};
pub use records::{extract_sequences, TERMINATOR};
pub use report::{emit_report, write_report};
pub use tables::{parse_gap_penalties, parse_weight_matrix};
