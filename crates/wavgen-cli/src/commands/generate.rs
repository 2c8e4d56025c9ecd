//! Generate command implementation
//!
//! Builds a configuration from the command line, opens the output sink and
//! streams the waveform into it.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use wavgen_backend::{generate, GenerateError, GenerateReport};
use wavgen_spec::{validate_config, ConfigError, WaveformConfig};

use super::json_output::{error_codes, GenerateOutput, JsonConfig, JsonError, JsonReport};
use crate::cli_args::Cli;
use crate::input::{check_filename, config_from_args};

/// Exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for errors while generating or writing.
pub const EXIT_GENERATE_ERROR: u8 = 2;

/// Where the WAV stream goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A file path.
    File(String),
    /// Standard output (piping to another program).
    Stdout,
}

impl OutputTarget {
    /// Chooses the target: the filename if given, else stdout when it is not a terminal.
    pub fn resolve(filename: Option<&str>, stdout_is_terminal: bool) -> Option<Self> {
        match filename {
            Some(name) => Some(OutputTarget::File(name.to_string())),
            None if !stdout_is_terminal => Some(OutputTarget::Stdout),
            None => None,
        }
    }

    /// Display label, `-` for stdout.
    pub fn label(&self) -> &str {
        match self {
            OutputTarget::File(path) => path,
            OutputTarget::Stdout => "-",
        }
    }

    fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create output file '{}'", path))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            OutputTarget::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}

/// A failed run, ready for reporting.
#[derive(Debug)]
struct Failure {
    exit: u8,
    error: JsonError,
    config: Option<WaveformConfig>,
}

impl Failure {
    fn config(err: &ConfigError, config: Option<WaveformConfig>) -> Self {
        Self {
            exit: EXIT_CONFIG_ERROR,
            error: JsonError::new(err.code(), err.to_string()),
            config,
        }
    }

    fn generate(err: &GenerateError, config: WaveformConfig) -> Self {
        let exit = if err.is_config_error() {
            EXIT_CONFIG_ERROR
        } else {
            EXIT_GENERATE_ERROR
        };
        Self {
            exit,
            error: JsonError::new(err.code(), err.to_string()),
            config: Some(config),
        }
    }

    fn cli(exit: u8, code: &str, err: &anyhow::Error, config: WaveformConfig) -> Self {
        Self {
            exit,
            error: JsonError::new(code, format!("{:#}", err)),
            config: Some(config),
        }
    }
}

struct Success {
    config: WaveformConfig,
    report: GenerateReport,
}

/// Run the generate command
///
/// # Arguments
/// * `cli` - Parsed command line
/// * `stdout_is_terminal` - Whether stdout is attached to a terminal
///
/// # Returns
/// Exit code: 0 success, 1 configuration error, 2 generation error
pub fn run(cli: &Cli, stdout_is_terminal: bool) -> Result<ExitCode> {
    let target = OutputTarget::resolve(cli.filename.as_deref(), stdout_is_terminal);
    let start = Instant::now();
    let outcome = execute(cli, target.as_ref());

    if cli.json {
        report_json(outcome, target.as_ref())
    } else {
        report_human(outcome, target.as_ref(), start)
    }
}

fn execute(cli: &Cli, target: Option<&OutputTarget>) -> std::result::Result<Success, Failure> {
    let config = config_from_args(cli).map_err(|e| Failure::config(&e, None))?;
    validate_config(&config).map_err(|e| Failure::config(&e, Some(config.clone())))?;

    let target = match target {
        Some(target) => target,
        None => {
            let err = ConfigError::invalid_value(
                "filename",
                "provide an output filename or pipe to another application",
            );
            return Err(Failure {
                exit: EXIT_CONFIG_ERROR,
                error: JsonError::new(error_codes::NO_OUTPUT, err.to_string()),
                config: Some(config),
            });
        }
    };
    if let OutputTarget::File(path) = target {
        check_filename(path).map_err(|e| Failure::config(&e, Some(config.clone())))?;
    }

    tracing::info!(output = target.label(), waveform = %config.waveform, "generating");

    let mut sink = target.open().map_err(|e| {
        Failure::cli(
            EXIT_GENERATE_ERROR,
            error_codes::OUTPUT_CREATE,
            &e,
            config.clone(),
        )
    })?;

    let report = match generate(&config, &mut sink) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(code = e.code(), "generation failed: {}", e);
            return Err(Failure::generate(&e, config));
        }
    };

    sink.flush()
        .with_context(|| format!("failed to flush '{}'", target.label()))
        .map_err(|e| {
            Failure::cli(
                EXIT_GENERATE_ERROR,
                error_codes::OUTPUT_FLUSH,
                &e,
                config.clone(),
            )
        })?;

    Ok(Success { config, report })
}

/// Run generate with human-readable (colored) output
fn report_human(
    outcome: std::result::Result<Success, Failure>,
    target: Option<&OutputTarget>,
    start: Instant,
) -> Result<ExitCode> {
    let piping = matches!(target, Some(OutputTarget::Stdout));

    match outcome {
        Ok(Success { config, report }) => {
            if piping {
                return Ok(ExitCode::SUCCESS);
            }
            let elapsed = start.elapsed();
            println!(
                "{} {} -> {}",
                "Generated:".green().bold(),
                config.waveform,
                target.map(OutputTarget::label).unwrap_or("-")
            );
            println!(
                "  {} {} Hz, {}, {} channel(s)",
                "Format:".dimmed(),
                config.sample_rate,
                config.format,
                config.channels
            );
            if config.waveform.uses_frequency() {
                println!(
                    "  {} {} Hz requested, {:.3} Hz realized",
                    "Frequency:".dimmed(),
                    config.frequency_hz,
                    report.realized_frequency_hz
                );
            }
            println!(
                "  {} {} samples/channel (~{} ms), {} bytes",
                "Length:".dimmed(),
                report.frames,
                report.duration_ms,
                report.total_bytes()
            );
            println!("  {} {}", "PCM hash:".dimmed(), report.pcm_hash);
            println!("  {} {:?}", "Time:".dimmed(), elapsed);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!(
                "{} [{}] {}",
                "error:".red().bold(),
                failure.error.code,
                failure.error.message
            );
            Ok(ExitCode::from(failure.exit))
        }
    }
}

/// Run generate with machine-readable JSON output
fn report_json(
    outcome: std::result::Result<Success, Failure>,
    target: Option<&OutputTarget>,
) -> Result<ExitCode> {
    let label = target.map(|t| t.label().to_string());
    let (output, exit) = match outcome {
        Ok(Success { config, report }) => (
            GenerateOutput::success(
                label.unwrap_or_else(|| "-".to_string()),
                JsonConfig::from(&config),
                JsonReport::from(&report),
            ),
            ExitCode::SUCCESS,
        ),
        Err(failure) => (
            GenerateOutput::failure(
                vec![failure.error],
                label,
                failure.config.as_ref().map(JsonConfig::from),
            ),
            ExitCode::from(failure.exit),
        ),
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialize report")?;
    // The WAV stream owns stdout when piping.
    if matches!(target, Some(OutputTarget::Stdout)) {
        eprintln!("{}", json);
    } else {
        println!("{}", json);
    }
    Ok(exit)
}
