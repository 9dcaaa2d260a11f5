//! Normalization of raw field values into a canonical reading.
//!
//! Two distinct defaulting policies apply downstream and must not be
//! conflated: the save pathway preserves absent fields as `null`, the
//! predict pathway substitutes 0 for every absent numeric field.

use crate::schema::{PredictRequest, Reading};

/// Numeric coercion rule shared by every reading field: trim, empty is
/// absent, anything that does not parse to a finite number is absent.
pub fn num_or_none(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// String field rule: trim, empty collapses to absent so the field is
/// omitted from the outbound payload.
pub fn empty_to_none(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Raw string inputs as collected from the form or CLI, before any
/// numeric coercion. Missing args and empty strings are equivalent.
#[derive(Debug, Clone, Default)]
pub struct ReadingForm {
    pub flow_ml: Option<String>,
    pub hb: Option<String>,
    pub ph: Option<String>,
    pub crp: Option<String>,
    pub hba1c_ratio: Option<String>,
    pub clots_score: Option<String>,
    pub fsh_level: Option<String>,
    pub lh_level: Option<String>,
    pub amh_level: Option<String>,
    pub tsh_level: Option<String>,
    pub prolactin_level: Option<String>,
    pub cycle_id: Option<String>,
}

impl ReadingForm {
    fn field(&self, raw: &Option<String>) -> Option<f64> {
        raw.as_deref().and_then(num_or_none)
    }

    /// Save pathway: absence stays absent (serialized as `null`).
    pub fn to_reading(&self, user_email: &str) -> Reading {
        Reading {
            user_email: user_email.to_string(),
            flow_ml: self.field(&self.flow_ml),
            hb: self.field(&self.hb),
            ph: self.field(&self.ph),
            crp: self.field(&self.crp),
            hba1c_ratio: self.field(&self.hba1c_ratio),
            clots_score: self.field(&self.clots_score),
            fsh_level: self.field(&self.fsh_level),
            lh_level: self.field(&self.lh_level),
            amh_level: self.field(&self.amh_level),
            tsh_level: self.field(&self.tsh_level),
            prolactin_level: self.field(&self.prolactin_level),
            cycle_id: self.cycle_id.as_deref().and_then(empty_to_none),
        }
    }

    /// Predict pathway: every absent numeric field defaults to 0 so the
    /// outbound payload is fully concrete.
    pub fn to_predict_request(&self, image_base64: Option<String>) -> PredictRequest {
        let zero = |raw: &Option<String>| self.field(raw).unwrap_or(0.0);
        PredictRequest {
            flow_ml: zero(&self.flow_ml),
            hb: zero(&self.hb),
            ph: zero(&self.ph),
            crp: zero(&self.crp),
            hba1c_ratio: zero(&self.hba1c_ratio),
            clots_score: zero(&self.clots_score),
            fsh_level: zero(&self.fsh_level),
            lh_level: zero(&self.lh_level),
            amh_level: zero(&self.amh_level),
            tsh_level: zero(&self.tsh_level),
            prolactin_level: zero(&self.prolactin_level),
            image_base64,
        }
    }

    /// Overwrite a field by its channel name. Used by the device path to
    /// pre-fill the form from validated channels.
    pub fn set_channel(&mut self, channel: &str, value: f64) -> bool {
        let slot = match channel {
            "flow_ml" => &mut self.flow_ml,
            "hb" => &mut self.hb,
            "ph" => &mut self.ph,
            "crp" => &mut self.crp,
            "hba1c_ratio" => &mut self.hba1c_ratio,
            "clots_score" => &mut self.clots_score,
            "fsh_level" => &mut self.fsh_level,
            "lh_level" => &mut self.lh_level,
            "amh_level" => &mut self.amh_level,
            "tsh_level" => &mut self.tsh_level,
            "prolactin_level" => &mut self.prolactin_level,
            _ => return false,
        };
        *slot = Some(format!("{value:.2}"));
        true
    }
}
