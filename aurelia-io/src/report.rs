//! Alignment report formatting and destination selection.
//!
//! The report is two literal header lines followed by the aligned pair
//! wrapped into fixed-width blocks: each block is an aligned-A slice on
//! one line and the matching aligned-B slice on the next, with a blank
//! line between consecutive blocks and none after the last.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use aurelia_core::{AureliaError, Result};

use aurelia_align::GlobalAlignment;

use crate::config::Config;

/// Write the report for `alignment` to `out`, wrapped at `max_columns`.
///
/// # Panics
///
/// Panics if `max_columns` is zero; configuration parsing rejects that
/// value before it can reach here.
pub fn write_report<W: Write>(
    mut out: W,
    alignment: &GlobalAlignment,
    max_columns: usize,
) -> io::Result<()> {
    writeln!(out, "Optimal Similarity Score: {}", alignment.score)?;
    writeln!(out, "Optimal Sequence Alignments A and B")?;

    let a = alignment.aligned_a.as_bytes();
    let b = alignment.aligned_b.as_bytes();
    for (block, (chunk_a, chunk_b)) in a.chunks(max_columns).zip(b.chunks(max_columns)).enumerate()
    {
        if block > 0 {
            writeln!(out)?;
        }
        out.write_all(chunk_a)?;
        writeln!(out)?;
        out.write_all(chunk_b)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Emit the report to the destination the configuration selects:
/// stdout, or a file created (or truncated) at `output_file`.
pub fn emit_report(alignment: &GlobalAlignment, config: &Config) -> Result<()> {
    if config.write_to_file {
        let path = config.output_file.as_ref().ok_or_else(|| {
            AureliaError::InvalidInput("writeToFile is set but no outputFile was given".to_string())
        })?;
        let mut out = BufWriter::new(File::create(path)?);
        write_report(&mut out, alignment, config.max_columns)?;
        out.flush()?;
    } else {
        let stdout = io::stdout();
        write_report(stdout.lock(), alignment, config.max_columns)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GlobalAlignment {
        GlobalAlignment {
            score: 4.0,
            aligned_a: "ACGT".to_string(),
            aligned_b: "A-GT".to_string(),
        }
    }

    fn render(alignment: &GlobalAlignment, max_columns: usize) -> String {
        let mut out = Vec::new();
        write_report(&mut out, alignment, max_columns).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_block_has_no_trailing_blank_line() {
        let expected = "Optimal Similarity Score: 4\n\
                        Optimal Sequence Alignments A and B\n\
                        ACGT\n\
                        A-GT\n";
        assert_eq!(render(&sample(), 80), expected);
    }

    #[test]
    fn blocks_are_separated_by_one_blank_line() {
        let expected = "Optimal Similarity Score: 4\n\
                        Optimal Sequence Alignments A and B\n\
                        AC\n\
                        A-\n\
                        \n\
                        GT\n\
                        GT\n";
        assert_eq!(render(&sample(), 2), expected);
    }

    #[test]
    fn trailing_partial_block() {
        let expected = "Optimal Similarity Score: 4\n\
                        Optimal Sequence Alignments A and B\n\
                        ACG\n\
                        A-G\n\
                        \n\
                        T\n\
                        T\n";
        assert_eq!(render(&sample(), 3), expected);
    }

    #[test]
    fn fractional_score_uses_default_display() {
        let alignment = GlobalAlignment {
            score: -2.5,
            aligned_a: "A".to_string(),
            aligned_b: "-".to_string(),
        };
        let text = render(&alignment, 80);
        assert!(text.starts_with("Optimal Similarity Score: -2.5\n"), "{text}");
    }

    #[test]
    fn empty_alignment_emits_only_headers() {
        let alignment = GlobalAlignment {
            score: 0.0,
            aligned_a: String::new(),
            aligned_b: String::new(),
        };
        let expected = "Optimal Similarity Score: 0\n\
                        Optimal Sequence Alignments A and B\n";
        assert_eq!(render(&alignment, 80), expected);
    }
}
