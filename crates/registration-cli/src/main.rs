mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use registration_form::{ErrorKind, ErrorState, EventOutcome, FormEvent, FormValidationEngine};
use render::Format;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "registration-replay",
    about = "Replay registration form events and render the resulting view"
)]
struct Cli {
    /// JSON-lines event script (reads stdin when omitted)
    script: Option<PathBuf>,

    /// Configuration file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output format for the final view
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open script: {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut engine = FormValidationEngine::with_password_visible(config.display.show_password);
    replay(&mut engine, reader)?;

    print!("{}", render::render(&engine.view(), cli.format, &config.display)?);
    Ok(())
}

/// Feed every event line into the engine. Blank lines and `#` comments are skipped.
fn replay(engine: &mut FormValidationEngine, reader: impl BufRead) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event = FormEvent::parse_line(trimmed)
            .with_context(|| format!("Invalid event on line {}", line_no))?;

        match engine.dispatch(event) {
            EventOutcome::Rejected(errors) => {
                let (missing, invalid) = rejection_summary(&errors);
                tracing::info!(
                    "Line {}: submit rejected (missing: {}; invalid: {})",
                    line_no,
                    missing.join(", "),
                    invalid.join(", ")
                );
            }
            outcome => {
                tracing::debug!("Line {}: {:?}", line_no, outcome);
            }
        }
    }

    Ok(())
}

/// Split failing fields into blank required ones and ones failing a format rule
fn rejection_summary(errors: &ErrorState) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();
    for (field, err) in errors.iter() {
        match err.map(|e| e.kind()) {
            Some(ErrorKind::Required) => missing.push(field.name()),
            Some(ErrorKind::Format) => invalid.push(field.name()),
            None => {}
        }
    }
    (missing, invalid)
}
