//! Conversion of alignment, peak and power-fraction settings to a linear gain.
//!
//! The alignment level is the absolute peak (dBFS) that everything else is
//! relative to. The peak level is a voltage adjustment relative to alignment.
//! A power fraction `n` replaces the peak level with a target RMS power of
//! `1/n` relative to alignment, e.g. `n = 8` for an "eighth-power" signal.

use serde::{Deserialize, Serialize};

/// Largest peak level relative to alignment.
pub const MAX_PEAK_DB: f64 = 20.0;

/// Level settings as supplied by the user, after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    /// Alignment level in dBFS (never above 0).
    pub align_dbfs: f64,
    /// Peak level in dB relative to alignment (at most +20).
    pub peak_db: f64,
    /// Power fraction denominator (1 = unused).
    pub power_fraction: u32,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            align_dbfs: 0.0,
            peak_db: 0.0,
            power_fraction: 1,
        }
    }
}

impl LevelParams {
    /// Builds level settings, clamping each value into its accepted range.
    pub fn new(align_dbfs: f64, peak_db: f64, power_fraction: u32) -> Self {
        Self {
            align_dbfs: align_dbfs.min(0.0),
            peak_db: peak_db.min(MAX_PEAK_DB),
            power_fraction: power_fraction.max(1),
        }
    }

    /// Linear gain for these settings.
    pub fn gain(&self) -> f64 {
        gain_from_levels(self.align_dbfs, self.peak_db, self.power_fraction)
    }
}

/// Computes the linear gain that takes a 0dBFS signal to the requested level.
///
/// The result is never greater than 1.0.
pub fn gain_from_levels(align_dbfs: f64, peak_db: f64, power_fraction: u32) -> f64 {
    let mut target_db = align_dbfs + peak_db;

    if power_fraction > 1 {
        // Power, not voltage: 10*log10.
        target_db = align_dbfs + 10.0 * (1.0 / power_fraction as f64).log10();
        if peak_db != 0.0 {
            tracing::warn!("peak level is ignored when a power fraction is supplied");
        }
    }

    let gain = 10f64.powf(target_db / 20.0);
    tracing::debug!(target_db, gain, "computed overall gain");

    gain.min(1.0)
}

/// Converts a linear gain back to decibels.
pub fn gain_to_db(gain: f64) -> f64 {
    20.0 * gain.log10()
}
