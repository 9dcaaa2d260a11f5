//! Plausibility filtering for device-sourced channel data.
//!
//! Values outside a channel's inclusive bound are dropped, not clamped
//! and not errored; the validator never fails.

use tracing::warn;

/// Inclusive plausible-value bounds per channel.
const CHANNEL_RANGES: [(&str, f64, f64); 30] = [
    ("flow_ml", 0.0, 500.0),
    ("hb", 5.0, 20.0),
    ("ph", 3.0, 8.0),
    ("crp", 0.0, 100.0),
    ("hba1c_ratio", 3.0, 15.0),
    ("clots_score", 0.0, 5.0),
    ("fsh_level", 0.0, 50.0),
    ("lh_level", 0.0, 50.0),
    ("amh_level", 0.0, 20.0),
    ("tsh_level", 0.0, 10.0),
    ("prolactin_level", 0.0, 100.0),
    ("esr", 0.0, 100.0),
    ("leukocyte_count", 1000.0, 20000.0),
    ("vaginal_ph", 3.0, 8.0),
    ("ca125", 0.0, 500.0),
    ("estrogen", 0.0, 1000.0),
    ("progesterone", 0.0, 50.0),
    ("androgens", 0.0, 200.0),
    ("blood_glucose", 50.0, 300.0),
    ("wbc_count", 1000.0, 20000.0),
    ("pain_score", 0.0, 10.0),
    ("weight_gain", -20.0, 50.0),
    ("acne_severity", 0.0, 5.0),
    ("insulin_resistance", 0.0, 10.0),
    ("fever", 35.0, 42.0),
    ("tenderness", 0.0, 3.0),
    ("pain_during_intercourse", 0.0, 1.0),
    ("bloating", 0.0, 1.0),
    ("weight_loss", 0.0, 50.0),
    ("appetite_loss", 0.0, 1.0),
];

/// Fallback bound for channels not in the table.
pub const DEFAULT_RANGE: (f64, f64) = (0.0, 1000.0);

#[derive(Debug, Clone, Default)]
pub struct ValidatedChannels {
    /// Surviving entries, input order preserved.
    pub values: Vec<(String, f64)>,
    pub has_valid_data: bool,
}

impl ValidatedChannels {
    pub fn get(&self, channel: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == channel)
            .map(|(_, v)| *v)
    }
}

/// Inclusive `[min, max]` bound for a channel name.
pub fn channel_range(channel: &str) -> (f64, f64) {
    CHANNEL_RANGES
        .iter()
        .find(|(name, _, _)| *name == channel)
        .map(|(_, min, max)| (*min, *max))
        .unwrap_or(DEFAULT_RANGE)
}

/// Keep only finite values within their channel bound. Out-of-range
/// entries are logged and dropped; the output never contains a value
/// outside its declared bound.
pub fn validate_channels(channels: &[(String, f64)]) -> ValidatedChannels {
    let mut validated = ValidatedChannels::default();
    for (name, value) in channels {
        if !value.is_finite() {
            continue;
        }
        let (min, max) = channel_range(name);
        if *value >= min && *value <= max {
            validated.values.push((name.clone(), *value));
            validated.has_valid_data = true;
        } else {
            warn!(channel = %name, value, "value out of range, dropped");
        }
    }
    validated
}
