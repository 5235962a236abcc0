mod algorithm;
mod cache;
mod options;
mod service;

pub use cache::{CACHE_TURNOFF_THRESHOLD, CacheMetrics, CacheState, CompilationCache};
pub use options::{
    CacheMode, DEFAULT_PATH_SEPARATOR, MatcherOptions, MatcherOptionsBuilder, MatcherOptionsError,
};
pub use service::{AntPathMatcher, PathMatcher, UriVariables};
