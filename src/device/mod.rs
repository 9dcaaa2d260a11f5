mod decode;
mod validate;

pub use decode::{decode_frame, CORE_CHANNELS, MIN_FRAME_LEN};
pub use validate::{channel_range, validate_channels, ValidatedChannels, DEFAULT_RANGE};
