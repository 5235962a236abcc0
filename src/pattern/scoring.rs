use std::cmp::{Ordering, Reverse};
use std::iter::Peekable;
use std::str::Chars;

use super::SeparatorPatterns;

/// Counts that decide how precise a pattern is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternSpecificity {
    pub uri_vars: usize,
    /// `*` and `?` outside of `**` and outside of variable bodies.
    pub single_wildcards: usize,
    pub double_wildcards: usize,
    pub catch_all: bool,
    pub prefix_pattern: bool,
    /// Character length with every `{...}` variable counted as one.
    pub length: usize,
}

impl PatternSpecificity {
    pub fn of(pattern: &str, separators: &SeparatorPatterns) -> Self {
        let mut spec = Self::default();
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            spec.length += 1;

            match ch {
                '{' => {
                    spec.uri_vars += 1;
                    skip_variable_body(&mut chars);
                }
                '*' if chars.peek() == Some(&'*') => {
                    chars.next();
                    spec.length += 1;
                    spec.double_wildcards += 1;
                }
                '*' | '?' => spec.single_wildcards += 1,
                _ => {}
            }
        }

        spec.catch_all = pattern == separators.ends_on_double_wildcard();
        spec.prefix_pattern =
            !spec.catch_all && pattern.ends_with(separators.ends_on_double_wildcard());
        spec
    }

    /// Variables and single wildcards weigh 1, `**` weighs 2.
    pub fn total_count(&self) -> usize {
        self.uri_vars + self.single_wildcards + 2 * self.double_wildcards
    }
}

fn skip_variable_body(chars: &mut Peekable<Chars<'_>>) {
    let mut depth = 1usize;

    for ch in chars.by_ref() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            _ => {}
        }
    }
}

/// Lexicographic rank; smaller is more specific. Ranking through one key keeps
/// the comparison a strict weak ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
struct SpecificityKey {
    least_specific: bool,
    differs_from_path: bool,
    prefix_pattern: bool,
    total_count: usize,
    length: Reverse<usize>,
    single_wildcards: usize,
    uri_vars: usize,
}

/// Orders patterns that all matched `path`, most specific first.
#[derive(Debug, Clone)]
pub struct PatternComparator {
    path: String,
    separators: SeparatorPatterns,
}

impl PatternComparator {
    pub fn new(path: &str, separators: SeparatorPatterns) -> Self {
        Self {
            path: path.to_string(),
            separators,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn specificity(&self, pattern: &str) -> PatternSpecificity {
        PatternSpecificity::of(pattern, &self.separators)
    }

    pub fn compare(&self, pattern1: &str, pattern2: &str) -> Ordering {
        self.compare_optional(Some(pattern1), Some(pattern2))
    }

    /// A missing pattern ranks with the catch-all, below everything else.
    pub fn compare_optional(&self, pattern1: Option<&str>, pattern2: Option<&str>) -> Ordering {
        self.key(pattern1).cmp(&self.key(pattern2))
    }

    /// Stable sort, most specific first.
    pub fn sort<S: AsRef<str>>(&self, patterns: &mut [S]) {
        patterns.sort_by_cached_key(|pattern| self.key(Some(pattern.as_ref())));
    }

    fn key(&self, pattern: Option<&str>) -> SpecificityKey {
        let Some(pattern) = pattern else {
            return SpecificityKey {
                least_specific: true,
                ..SpecificityKey::default()
            };
        };

        let spec = self.specificity(pattern);

        if spec.catch_all {
            return SpecificityKey {
                least_specific: true,
                ..SpecificityKey::default()
            };
        }

        if pattern == self.path {
            return SpecificityKey::default();
        }

        SpecificityKey {
            least_specific: false,
            differs_from_path: true,
            prefix_pattern: spec.prefix_pattern,
            total_count: spec.total_count(),
            length: Reverse(spec.length),
            single_wildcards: spec.single_wildcards,
            uri_vars: spec.uri_vars,
        }
    }
}
