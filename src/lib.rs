//! Ant-style path pattern matching for request routing.
//!
//! Patterns are separator-delimited segments that may hold `?` (one
//! character), `*` (any run within a segment), `**` (any number of whole
//! segments) and `{name}` / `{name:regex}` captures.
//!
//! ```
//! use bunner_path_matcher::{AntPathMatcher, PathMatcher};
//!
//! let matcher = AntPathMatcher::new();
//! assert!(matcher.matches("/hotels/**", "/hotels/new/york").unwrap());
//!
//! let vars = matcher
//!     .extract_uri_template_variables("/hotels/{hotel}", "/hotels/1")
//!     .unwrap();
//! assert_eq!(vars["hotel"], "1");
//! ```

pub mod errors;
pub mod matcher;
pub mod path;
pub mod pattern;

pub use errors::{PathMatchError, PathMatchResult};
pub use matcher::{
    AntPathMatcher, CacheMetrics, CacheMode, CacheState, MatcherOptions, MatcherOptionsBuilder,
    MatcherOptionsError, PathMatcher, UriVariables,
};
pub use pattern::{PatternComparator, PatternSpecificity};
