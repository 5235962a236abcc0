use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;
use std::sync::LazyLock;

use crate::errors::{PathMatchError, PathMatchResult};

/// `?`, `*`, `{name}` and `{name:regex}`. The custom regex may carry `{m,n}`
/// quantifiers and escaped braces, but never the path separator.
static GLOB_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\?|\*|\{((?:\{[^/]+?\}|[^/{}]|\\[{}])+?)\}")
        .expect("glob token pattern should compile")
});

const DEFAULT_VARIABLE_PATTERN: &str = "(.*)";

pub type CapturedVariable = (String, String);
pub type CaptureList = SmallVec<[CapturedVariable; 4]>;

#[derive(Debug)]
enum SegmentKind {
    Exact {
        folded: Option<Box<str>>,
    },
    Glob {
        regex: Regex,
        variables: Vec<Box<str>>,
    },
}

/// One compiled pattern segment such as `*.html`, `fo?` or `{id:[0-9]+}`.
#[derive(Debug)]
pub struct SegmentMatcher {
    raw: Box<str>,
    kind: SegmentKind,
}

impl SegmentMatcher {
    #[tracing::instrument(level = "trace", skip_all, fields(segment = %segment, case_sensitive))]
    pub fn compile(segment: &str, case_sensitive: bool) -> PathMatchResult<Self> {
        let mut body = String::with_capacity(segment.len() + 8);
        let mut variables: Vec<Box<str>> = Vec::new();
        let mut end = 0usize;
        let mut found = false;

        for token in GLOB_TOKEN.find_iter(segment) {
            found = true;
            body.push_str(&regex::escape(&segment[end..token.start()]));

            match token.as_str() {
                "?" => body.push('.'),
                "*" => body.push_str(".*"),
                braced => {
                    let inner = &braced[1..braced.len() - 1];

                    match inner.find(':') {
                        None => {
                            body.push_str(DEFAULT_VARIABLE_PATTERN);
                            variables.push(inner.into());
                        }
                        Some(colon) => {
                            body.push('(');
                            body.push_str(&inner[colon + 1..]);
                            body.push(')');
                            variables.push(inner[..colon].into());
                        }
                    }
                }
            }

            end = token.end();
        }

        if !found {
            let folded = (!case_sensitive).then(|| segment.to_lowercase().into_boxed_str());

            return Ok(Self {
                raw: segment.into(),
                kind: SegmentKind::Exact { folded },
            });
        }

        body.push_str(&regex::escape(&segment[end..]));

        let regex = RegexBuilder::new(&format!("^(?:{})$", body))
            .case_insensitive(!case_sensitive)
            .dot_matches_new_line(true)
            .build()
            .map_err(|err| {
                tracing::debug!(segment, error = %err, "segment regex failed to compile");

                PathMatchError::InvalidSegmentRegex {
                    segment: segment.to_string(),
                    error: err.to_string(),
                }
            })?;

        Ok(Self {
            raw: segment.into(),
            kind: SegmentKind::Glob { regex, variables },
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_exact(&self) -> bool {
        matches!(self.kind, SegmentKind::Exact { .. })
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        let names: &[Box<str>] = match &self.kind {
            SegmentKind::Exact { .. } => &[],
            SegmentKind::Glob { variables, .. } => variables,
        };

        names.iter().map(|name| &**name)
    }

    /// Matches one path segment. Variables are appended to `captures` only on
    /// success, and only then is the group/name count invariant enforced.
    pub fn matches(&self, s: &str, captures: Option<&mut CaptureList>) -> PathMatchResult<bool> {
        match &self.kind {
            SegmentKind::Exact { folded: None } => Ok(&*self.raw == s),
            SegmentKind::Exact {
                folded: Some(folded),
            } => Ok(**folded == s.to_lowercase()),
            SegmentKind::Glob { regex, variables } => {
                let Some(out) = captures else {
                    return Ok(regex.is_match(s));
                };

                let Some(caps) = regex.captures(s) else {
                    return Ok(false);
                };

                let groups = regex.captures_len() - 1;

                if variables.len() != groups {
                    return Err(PathMatchError::CaptureGroupMismatch {
                        segment: self.raw.to_string(),
                        variables: variables.len(),
                        groups,
                    });
                }

                for (idx, name) in variables.iter().enumerate() {
                    if name.starts_with('*') {
                        return Err(PathMatchError::CapturingPatternUnsupported {
                            segment: self.raw.to_string(),
                            name: name.to_string(),
                        });
                    }

                    let value = caps.get(idx + 1).map(|m| m.as_str()).unwrap_or_default();
                    out.push((name.to_string(), value.to_string()));
                }

                Ok(true)
            }
        }
    }
}
