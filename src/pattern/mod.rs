mod combine;
mod scoring;
mod segment;
mod separator;

pub(crate) use combine::combine_patterns;
pub use scoring::{PatternComparator, PatternSpecificity};
pub use segment::{CaptureList, CapturedVariable, SegmentMatcher};
pub use separator::SeparatorPatterns;

pub const DOUBLE_WILDCARD: &str = "**";
pub const SINGLE_WILDCARD: &str = "*";
