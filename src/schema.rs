//! Wire shapes exchanged with the FemPlus backend.
//!
//! Maps whose iteration order is observable in rendering (flags,
//! probabilities, condition biomarkers) deserialize into ordered pairs
//! rather than a hash map; probability tie-breaking depends on it.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Payload for `POST /flow/single`. Absent numeric fields are sent as
/// `null`; an absent cycle identifier is omitted entirely.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub user_email: String,
    pub flow_ml: Option<f64>,
    pub hb: Option<f64>,
    pub ph: Option<f64>,
    pub crp: Option<f64>,
    pub hba1c_ratio: Option<f64>,
    pub clots_score: Option<f64>,
    pub fsh_level: Option<f64>,
    pub lh_level: Option<f64>,
    pub amh_level: Option<f64>,
    pub tsh_level: Option<f64>,
    pub prolactin_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<String>,
}

/// Payload for `POST /flow/predict`. Every numeric field is concrete;
/// the zero-defaulting happens in the normalizer, not here.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub flow_ml: f64,
    pub hb: f64,
    pub ph: f64,
    pub crp: f64,
    pub hba1c_ratio: f64,
    pub clots_score: f64,
    pub fsh_level: f64,
    pub lh_level: f64,
    pub amh_level: f64,
    pub tsh_level: f64,
    pub prolactin_level: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub blood_group: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    pub rating: u8,
    pub comment: String,
    pub context_type: String,
    pub user_email: Option<String>,
}

/// Inbound shape from `/flow/predict` and `/flow/analysis/{email}`.
/// Every field tolerates absence; rendering must not assume the
/// probabilities are normalized.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub risk_indicator: Option<String>,
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub flags: Vec<(String, String)>,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub probabilities: Vec<(String, f64)>,
    #[serde(default)]
    pub detected_conditions: Vec<DetectedCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectedCondition {
    pub condition: String,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub matched_count: u64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub biomarkers: Vec<(String, f64)>,
}

/// Latest gas sensor telemetry, or a `{error, message}` shape when the
/// upstream channel is not configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GasSnapshot {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub aqi: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub co2_ppm: Option<f64>,
    #[serde(default)]
    pub co_ppm: Option<f64>,
    #[serde(default)]
    pub no2_ppb: Option<f64>,
    #[serde(default)]
    pub o3_ppb: Option<f64>,
    #[serde(default)]
    pub pm25_ugm3: Option<f64>,
    #[serde(default)]
    pub pm10_ugm3: Option<f64>,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub humidity_pct: Option<f64>,
    #[serde(default)]
    pub color_red: Option<f64>,
    #[serde(default)]
    pub color_green: Option<f64>,
    #[serde(default)]
    pub color_blue: Option<f64>,
    #[serde(default)]
    pub color_clear: Option<f64>,
    #[serde(default)]
    pub color_hue: Option<f64>,
    #[serde(default)]
    pub color_saturation: Option<f64>,
    #[serde(default)]
    pub color_brightness: Option<f64>,
    #[serde(default)]
    pub color_category: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub health_concern: Option<String>,
}

/// Deserialize a JSON object into pairs, preserving document order.
fn ordered_pairs<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct PairVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for PairVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                pairs.push(entry);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairVisitor(PhantomData))
}
