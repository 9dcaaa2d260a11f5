mod normalize;

pub use normalize::{empty_to_none, num_or_none, ReadingForm};
