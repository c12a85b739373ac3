//! End-to-end pipeline test: config file → tables → records → alignment
//! → report, over real files in a temporary directory.

use std::fs;

use tempfile::TempDir;

use aurelia_align::global_align;
use aurelia_io::{
    emit_report, extract_sequences, parse_config, parse_gap_penalties, parse_weight_matrix,
    write_report,
};

const WEIGHTS: &str = "# substitution weights, A C G T\n\
                       2 -1 -1 -1\n\
                       -1 2 -1 -1\n\
                       -1 -1 2 -1\n\
                       -1 -1 -1 2\n";

const GAPS: &str = "# per-nucleotide gap penalties\n\
                    -2 -2 -2 -2\n";

const SEQUENCES: &str = "# two DNA records\n\
                         SEQUENCEA: AC\n\
                         GTX\n\
                         SEQUENCEB: AGTX\n";

fn write_fixtures(dir: &TempDir, extra_config: &str) -> String {
    let weights = dir.path().join("weights.txt");
    let gaps = dir.path().join("gaps.txt");
    let seqs = dir.path().join("sequences.txt");
    fs::write(&weights, WEIGHTS).unwrap();
    fs::write(&gaps, GAPS).unwrap();
    fs::write(&seqs, SEQUENCES).unwrap();

    format!(
        "sequenceInputFile={}\n\
         sequenceA=SEQUENCEA\n\
         sequenceB=SEQUENCEB\n\
         weightMatrixFile={}\n\
         gapPenaltyFile={}\n\
         {extra_config}",
        seqs.display(),
        weights.display(),
        gaps.display(),
    )
}

#[test]
fn file_to_report_round_trip() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("run.conf");
    fs::write(&config_path, write_fixtures(&dir, "")).unwrap();

    let config = parse_config(&fs::read_to_string(&config_path).unwrap()).unwrap();
    let weights =
        parse_weight_matrix(&fs::read_to_string(&config.weight_matrix_file).unwrap()).unwrap();
    let gaps = parse_gap_penalties(&fs::read_to_string(&config.gap_penalty_file).unwrap()).unwrap();
    let text = fs::read_to_string(&config.sequence_input_file).unwrap();
    let (a, b) = extract_sequences(&text, &config.sequence_a, &config.sequence_b).unwrap();

    assert_eq!(a.len(), 4);
    assert_eq!(b.len(), 3);

    let alignment = global_align(&a, &b, &weights, &gaps).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, &alignment, config.max_columns).unwrap();
    let report = String::from_utf8(out).unwrap();

    let expected = "Optimal Similarity Score: 4\n\
                    Optimal Sequence Alignments A and B\n\
                    ACGT\n\
                    A-GT\n";
    assert_eq!(report, expected);
}

#[test]
fn report_written_to_configured_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("alignment.out");
    let extra = format!("writeToFile=true\noutputFile={}\nmaxColumns=2\n", out_path.display());
    let config = parse_config(&write_fixtures(&dir, &extra)).unwrap();

    let weights =
        parse_weight_matrix(&fs::read_to_string(&config.weight_matrix_file).unwrap()).unwrap();
    let gaps = parse_gap_penalties(&fs::read_to_string(&config.gap_penalty_file).unwrap()).unwrap();
    let text = fs::read_to_string(&config.sequence_input_file).unwrap();
    let (a, b) = extract_sequences(&text, &config.sequence_a, &config.sequence_b).unwrap();
    let alignment = global_align(&a, &b, &weights, &gaps).unwrap();

    emit_report(&alignment, &config).unwrap();

    let expected = "Optimal Similarity Score: 4\n\
                    Optimal Sequence Alignments A and B\n\
                    AC\n\
                    A-\n\
                    \n\
                    GT\n\
                    GT\n";
    assert_eq!(fs::read_to_string(&out_path).unwrap(), expected);
}

#[test]
fn emit_report_truncates_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("alignment.out");
    fs::write(&out_path, "stale content that must disappear\n".repeat(10)).unwrap();

    let extra = format!("writeToFile=true\noutputFile={}\n", out_path.display());
    let config = parse_config(&write_fixtures(&dir, &extra)).unwrap();

    let alignment = aurelia_align::GlobalAlignment {
        score: 1.0,
        aligned_a: "A".to_string(),
        aligned_b: "A".to_string(),
    };
    emit_report(&alignment, &config).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("Optimal Similarity Score: 1\n"), "{written}");
    assert!(!written.contains("stale"), "{written}");
}
