use std::collections::HashMap;

use super::{CacheMetrics, CompilationCache, MatcherOptions};
use crate::errors::{PathMatchError, PathMatchResult};
use crate::path::tokenize;
use crate::pattern::{CaptureList, PatternComparator, SeparatorPatterns, combine_patterns};

pub type UriVariables = HashMap<String, String>;

/// Path matching as seen by a routing layer.
pub trait PathMatcher {
    /// True when `path` holds a `*` or `?` and so needs pattern matching.
    fn is_pattern(&self, path: &str) -> bool;

    fn matches(&self, pattern: &str, path: &str) -> PathMatchResult<bool>;

    /// Whether `pattern` matches the leading segments of `path`, i.e. whether
    /// the path could still lie below the pattern.
    fn match_start(&self, pattern: &str, path: &str) -> PathMatchResult<bool>;

    /// The part of `path` covered by the first wildcard segment of `pattern`
    /// and everything after it.
    fn extract_path_within_pattern(&self, pattern: &str, path: &str) -> String;

    fn extract_uri_template_variables(
        &self,
        pattern: &str,
        path: &str,
    ) -> PathMatchResult<UriVariables>;

    fn pattern_comparator(&self, path: &str) -> PatternComparator;

    fn combine(&self, pattern1: &str, pattern2: &str) -> PathMatchResult<String>;
}

/// Ant-style matcher: `?`, `*`, `**` and `{name}` / `{name:regex}`.
///
/// Stateless apart from its compilation caches, so one instance is meant to be
/// shared across threads.
#[derive(Debug)]
pub struct AntPathMatcher {
    pub(crate) options: MatcherOptions,
    pub(crate) separators: SeparatorPatterns,
    pub(crate) cache: CompilationCache,
}

impl Default for AntPathMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl AntPathMatcher {
    pub fn new() -> Self {
        Self::from_validated(MatcherOptions::default())
    }

    pub fn with_options(options: MatcherOptions) -> PathMatchResult<Self> {
        options.validate()?;
        Ok(Self::from_validated(options))
    }

    fn from_validated(options: MatcherOptions) -> Self {
        Self {
            separators: SeparatorPatterns::new(&options.separator),
            cache: CompilationCache::new(options.cache_mode),
            options,
        }
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    pub fn separator(&self) -> &str {
        self.separators.separator()
    }

    pub fn cache_metrics(&self) -> CacheMetrics {
        self.cache.metrics()
    }
}

impl PathMatcher for AntPathMatcher {
    fn is_pattern(&self, path: &str) -> bool {
        path.contains(['*', '?'])
    }

    fn matches(&self, pattern: &str, path: &str) -> PathMatchResult<bool> {
        self.do_match(pattern, path, true, None)
    }

    fn match_start(&self, pattern: &str, path: &str) -> PathMatchResult<bool> {
        self.do_match(pattern, path, false, None)
    }

    fn extract_path_within_pattern(&self, pattern: &str, path: &str) -> String {
        let separator = self.separators.separator();
        let trim = self.options.trim_tokens;
        let pattern_parts = tokenize(pattern, separator, trim, true);
        let path_parts = tokenize(path, separator, trim, true);
        let leading = !pattern.starts_with(separator);

        let mut out = String::new();
        let mut path_started = false;
        let mut segment = 0usize;

        while segment < pattern_parts.len() {
            if pattern_parts[segment].contains(['*', '?']) {
                while segment < path_parts.len() {
                    if path_started || (segment == 0 && leading) {
                        out.push_str(separator);
                    }
                    out.push_str(path_parts[segment]);
                    path_started = true;
                    segment += 1;
                }
            }
            segment += 1;
        }

        out
    }

    fn extract_uri_template_variables(
        &self,
        pattern: &str,
        path: &str,
    ) -> PathMatchResult<UriVariables> {
        let mut captures = CaptureList::new();

        if !self.do_match(pattern, path, true, Some(&mut captures))? {
            tracing::debug!(pattern, path, "variable extraction on a non-matching path");

            return Err(PathMatchError::PatternMismatch {
                pattern: pattern.to_string(),
                path: path.to_string(),
            });
        }

        Ok(captures.into_iter().collect())
    }

    fn pattern_comparator(&self, path: &str) -> PatternComparator {
        PatternComparator::new(path, self.separators.clone())
    }

    fn combine(&self, pattern1: &str, pattern2: &str) -> PathMatchResult<String> {
        combine_patterns(pattern1, pattern2, &self.separators, |p, s| {
            self.matches(p, s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AntPathMatcher>();
    }

    #[test]
    fn trait_object_dispatches_to_matcher() {
        let matcher: Box<dyn PathMatcher + Send + Sync> = Box::new(AntPathMatcher::new());
        assert!(matcher.is_pattern("/hotels/*"));
        assert!(!matcher.is_pattern("/hotels/{id}"));
        assert!(matcher.matches("/hotels/*", "/hotels/1").unwrap());
    }

    #[test]
    fn later_duplicate_variable_wins() {
        let matcher = AntPathMatcher::new();
        let vars = matcher
            .extract_uri_template_variables("/{id}/{id}", "/a/b")
            .expect("pattern should match");
        assert_eq!(vars.get("id").map(String::as_str), Some("b"));
    }
}
