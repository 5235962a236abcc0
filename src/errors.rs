use crate::matcher::MatcherOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathMatchError {
    #[error("pattern '{pattern}' is not a match for path '{path}'")]
    PatternMismatch { pattern: String, path: String },
    #[error(
        "the number of capturing groups in the pattern segment '{segment}' ({groups}) does not match the number of URI template variables it defines ({variables}); use non-capturing groups instead"
    )]
    CaptureGroupMismatch {
        segment: String,
        variables: usize,
        groups: usize,
    },
    #[error("capturing patterns ({name}) are not supported in segment '{segment}'")]
    CapturingPatternUnsupported { segment: String, name: String },
    #[error("segment '{segment}' compiles to an invalid regex: {error}")]
    InvalidSegmentRegex { segment: String, error: String },
    #[error("cannot combine patterns: '{pattern1}' vs '{pattern2}'")]
    IncompatibleExtensions { pattern1: String, pattern2: String },
    #[error(transparent)]
    Options(#[from] MatcherOptionsError),
}

pub type PathMatchResult<T> = Result<T, PathMatchError>;
