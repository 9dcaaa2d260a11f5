//! Raw device frame decoding.
//!
//! The transport (Bluetooth characteristic read) is an opaque byte
//! producer; frames carry one little-endian f32 per core channel at
//! fixed 4-byte offsets.

use anyhow::{bail, Result};

/// Core channels in frame order, offsets 0,4,..,40.
pub const CORE_CHANNELS: [&str; 11] = [
    "flow_ml",
    "hb",
    "ph",
    "crp",
    "hba1c_ratio",
    "clots_score",
    "fsh_level",
    "lh_level",
    "amh_level",
    "tsh_level",
    "prolactin_level",
];

pub const MIN_FRAME_LEN: usize = CORE_CHANNELS.len() * 4;

/// Decode one frame into ordered channel/value pairs. Values are raw;
/// plausibility filtering happens in the validator.
pub fn decode_frame(buf: &[u8]) -> Result<Vec<(String, f64)>> {
    if buf.len() < MIN_FRAME_LEN {
        bail!(
            "device frame too short: {} bytes, expected at least {}",
            buf.len(),
            MIN_FRAME_LEN
        );
    }
    let mut channels = Vec::with_capacity(CORE_CHANNELS.len());
    for (i, name) in CORE_CHANNELS.iter().enumerate() {
        let offset = i * 4;
        let bytes = [buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]];
        let value = f32::from_le_bytes(bytes) as f64;
        channels.push((name.to_string(), value));
    }
    Ok(channels)
}
