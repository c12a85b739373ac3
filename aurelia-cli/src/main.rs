use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use aurelia_align::global_align;
use aurelia_io::{
    emit_report, extract_sequences, parse_config, parse_gap_penalties, parse_weight_matrix, Config,
};

#[derive(Parser)]
#[command(name = "aurelia")]
#[command(about = "Optimal global alignment of two DNA sequences", long_about = None)]
#[command(version)]
struct Cli {
    /// Run configuration file (key=value lines)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> aurelia_core::Result<()> {
    let config = parse_config(&fs::read_to_string(&cli.config)?)?;
    init_logging(&config);

    let weights = parse_weight_matrix(&fs::read_to_string(&config.weight_matrix_file)?)?;
    let gaps = parse_gap_penalties(&fs::read_to_string(&config.gap_penalty_file)?)?;

    let text = fs::read_to_string(&config.sequence_input_file)?;
    let (a, b) = extract_sequences(&text, &config.sequence_a, &config.sequence_b)?;
    log::info!("aligning {} x {} nucleotides", a.len(), b.len());

    let alignment = global_align(&a, &b, &weights, &gaps)?;
    log::info!(
        "optimal score {} over {} alignment columns",
        alignment.score,
        alignment.len()
    );

    emit_report(&alignment, &config)
}

fn init_logging(config: &Config) {
    let level = if config.debug_mode {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
