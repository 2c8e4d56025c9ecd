//! Parsing of unit-suffixed command-line values.
//!
//! Durations accept `ms` (the default), `s`, `m` and `h`. Frequencies accept
//! `Hz` (the default) and `k`/`kHz`.

use wavgen_spec::{ConfigError, ConfigResult};

/// Splits `"250ms"` into `(250, "ms")`.
fn split_number(name: &str, input: &str) -> ConfigResult<(u64, String)> {
    let trimmed = input.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(digits_end);

    if digits.is_empty() {
        return Err(ConfigError::invalid_value(
            name,
            format!("'{}' does not start with a number", input),
        ));
    }

    let value = digits.parse::<u64>().map_err(|_| {
        ConfigError::invalid_value(name, format!("'{}' is too large", digits))
    })?;
    Ok((value, suffix.trim().to_ascii_lowercase()))
}

/// Parses a duration into milliseconds.
///
/// # Example
/// ```
/// use wavgen_cli::units::parse_duration_ms;
///
/// assert_eq!(parse_duration_ms("1500").unwrap(), 1500);
/// assert_eq!(parse_duration_ms("2s").unwrap(), 2000);
/// assert_eq!(parse_duration_ms("1m").unwrap(), 60_000);
/// ```
pub fn parse_duration_ms(input: &str) -> ConfigResult<u64> {
    let (value, suffix) = split_number("duration", input)?;
    let scale: u64 = match suffix.as_str() {
        "" | "ms" => 1,
        "s" => 1000,
        "m" => 60 * 1000,
        "h" => 60 * 60 * 1000,
        other => {
            return Err(ConfigError::invalid_value(
                "duration",
                format!("unknown unit '{}' (use h, m, s, ms or nothing)", other),
            ))
        }
    };
    value.checked_mul(scale).ok_or_else(|| {
        ConfigError::invalid_value("duration", format!("'{}' is too long", input))
    })
}

/// Parses a frequency into Hz.
///
/// # Example
/// ```
/// use wavgen_cli::units::parse_frequency_hz;
///
/// assert_eq!(parse_frequency_hz("440").unwrap(), 440);
/// assert_eq!(parse_frequency_hz("1kHz").unwrap(), 1000);
/// assert_eq!(parse_frequency_hz("48k").unwrap(), 48_000);
/// ```
pub fn parse_frequency_hz(input: &str) -> ConfigResult<u32> {
    let (value, suffix) = split_number("frequency", input)?;
    let scale: u64 = match suffix.as_str() {
        "" | "hz" => 1,
        "k" | "khz" => 1000,
        other => {
            return Err(ConfigError::invalid_value(
                "frequency",
                format!("unknown unit '{}' (use kHz or Hz/nothing)", other),
            ))
        }
    };
    value
        .checked_mul(scale)
        .and_then(|hz| u32::try_from(hz).ok())
        .ok_or_else(|| ConfigError::invalid_value("frequency", format!("'{}' is too high", input)))
}
