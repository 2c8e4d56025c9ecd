//! Describe command implementation
//!
//! Prints help for one waveform type, or a summary of all of them.

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use wavgen_spec::WaveformType;

/// Run the describe command
///
/// # Arguments
/// * `name` - Waveform type or alias, or `all`
///
/// # Returns
/// Exit code: 0 success, 1 unknown type
pub fn run(name: &str) -> Result<ExitCode> {
    if name == "all" {
        println!("{}", "Waveform types:".cyan().bold());
        for waveform in WaveformType::ALL {
            println!("  {:<8} {}", waveform.as_str().green(), waveform.summary());
        }
        println!();
        println!("Use {} for details.", "--describe <TYPE>".bold());
        return Ok(ExitCode::SUCCESS);
    }

    match WaveformType::from_str(name) {
        Ok(waveform) => {
            println!("{}", waveform.description());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            eprintln!("Use {} to list the types.", "--describe".bold());
            Ok(ExitCode::from(1))
        }
    }
}
