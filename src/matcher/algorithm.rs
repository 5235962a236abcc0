use super::AntPathMatcher;
use super::cache::PatternTokens;
use crate::errors::PathMatchResult;
use crate::path::tokenize;
use crate::pattern::{CaptureList, DOUBLE_WILDCARD, SINGLE_WILDCARD, SegmentMatcher};

impl AntPathMatcher {
    /// Matches `path` against `pattern`.
    ///
    /// With `full_match == false` the pattern only has to cover a leading
    /// part of the path's segments (the path could still fall under the
    /// pattern's subtree). Variables are pushed onto `captures` when given.
    #[tracing::instrument(level = "trace", skip_all, fields(pattern = %pattern, path = %path, full_match))]
    pub(crate) fn do_match(
        &self,
        pattern: &str,
        path: &str,
        full_match: bool,
        mut captures: Option<&mut CaptureList>,
    ) -> PathMatchResult<bool> {
        let separator = self.separators.separator();

        if path.starts_with(separator) != pattern.starts_with(separator) {
            return Ok(false);
        }

        let patt_dirs = self.tokenize_pattern(pattern);

        if full_match
            && self.options.case_sensitive
            && self.options.potential_match_precheck
            && !self.is_potential_match(path, &patt_dirs)
        {
            return Ok(false);
        }

        let path_dirs = self.tokenize_path(path);

        let mut patt_start = 0usize;
        let mut patt_end = patt_dirs.len();
        let mut path_start = 0usize;
        let mut path_end = path_dirs.len();

        // left side, up to the first `**`
        while patt_start < patt_end && path_start < path_end {
            let patt_dir = &*patt_dirs[patt_start];

            if patt_dir == DOUBLE_WILDCARD {
                break;
            }

            if !self.match_strings(patt_dir, path_dirs[path_start], captures.as_deref_mut())? {
                return Ok(false);
            }

            patt_start += 1;
            path_start += 1;
        }

        if path_start >= path_end {
            if patt_start >= patt_end {
                return Ok(pattern.ends_with(separator) == path.ends_with(separator));
            }

            if !full_match {
                return Ok(true);
            }

            if patt_start + 1 == patt_end
                && &*patt_dirs[patt_start] == SINGLE_WILDCARD
                && path.ends_with(separator)
            {
                return Ok(true);
            }

            return Ok(only_double_wildcards(&patt_dirs[patt_start..patt_end]));
        } else if patt_start >= patt_end {
            return Ok(false);
        } else if !full_match && &*patt_dirs[patt_start] == DOUBLE_WILDCARD {
            return Ok(true);
        }

        // right side, down to the last `**`
        while patt_start < patt_end && path_start < path_end {
            let patt_dir = &*patt_dirs[patt_end - 1];

            if patt_dir == DOUBLE_WILDCARD {
                break;
            }

            if !self.match_strings(patt_dir, path_dirs[path_end - 1], captures.as_deref_mut())? {
                return Ok(false);
            }

            if patt_end == patt_dirs.len()
                && pattern.ends_with(separator) != path.ends_with(separator)
            {
                return Ok(false);
            }

            patt_end -= 1;
            path_end -= 1;
        }

        if path_start >= path_end {
            return Ok(only_double_wildcards(&patt_dirs[patt_start..patt_end]));
        }

        // Both ends now sit on a `**`. Slide each literal run found between two
        // of them over the remaining path segments, first fit wins.
        while patt_start + 1 < patt_end && path_start < path_end {
            let Some(offset) = patt_dirs[patt_start + 1..patt_end]
                .iter()
                .position(|dir| &**dir == DOUBLE_WILDCARD)
            else {
                break;
            };
            let next_double = patt_start + 1 + offset;

            // `**/**`
            if next_double == patt_start + 1 {
                patt_start += 1;
                continue;
            }

            let run = &patt_dirs[patt_start + 1..next_double];
            let remaining = &path_dirs[path_start..path_end];
            let mut found = None;

            if remaining.len() >= run.len() {
                'windows: for shift in 0..=(remaining.len() - run.len()) {
                    let checkpoint = captures.as_ref().map(|out| out.len());

                    for (patt_dir, path_dir) in run.iter().zip(&remaining[shift..]) {
                        if !self.match_strings(patt_dir, path_dir, captures.as_deref_mut())? {
                            if let (Some(out), Some(len)) = (captures.as_deref_mut(), checkpoint) {
                                out.truncate(len);
                            }
                            continue 'windows;
                        }
                    }

                    found = Some(path_start + shift);
                    break;
                }
            }

            let Some(found) = found else {
                return Ok(false);
            };

            patt_start = next_double;
            path_start = found + run.len();
        }

        Ok(only_double_wildcards(&patt_dirs[patt_start..patt_end]))
    }

    pub(crate) fn tokenize_pattern(&self, pattern: &str) -> PatternTokens {
        self.cache.tokens(pattern, || {
            tokenize(
                pattern,
                self.separators.separator(),
                self.options.trim_tokens,
                true,
            )
            .into_iter()
            .map(Box::<str>::from)
            .collect()
        })
    }

    pub(crate) fn tokenize_path<'a>(&self, path: &'a str) -> Vec<&'a str> {
        tokenize(
            path,
            self.separators.separator(),
            self.options.trim_tokens,
            true,
        )
    }

    fn match_strings(
        &self,
        pattern: &str,
        s: &str,
        captures: Option<&mut CaptureList>,
    ) -> PathMatchResult<bool> {
        let case_sensitive = self.options.case_sensitive;
        let matcher = self
            .cache
            .segment(pattern, || SegmentMatcher::compile(pattern, case_sensitive))?;

        matcher.matches(s, captures)
    }

    /// Cheap literal-prefix walk over the raw path. Only rejects when the
    /// first character of some pattern segment cannot line up.
    fn is_potential_match(&self, path: &str, patt_dirs: &[Box<str>]) -> bool {
        if self.options.trim_tokens {
            return true;
        }

        let separator = self.separators.separator();
        let mut pos = 0usize;

        for patt_dir in patt_dirs {
            pos += skip_separators(path, pos, separator);
            let skipped = skip_segment(path, pos, patt_dir);

            if skipped < patt_dir.len() {
                return skipped > 0 || patt_dir.bytes().next().is_some_and(is_wildcard_byte);
            }

            pos += skipped;
        }

        true
    }
}

#[inline]
fn only_double_wildcards(dirs: &[Box<str>]) -> bool {
    dirs.iter().all(|dir| &**dir == DOUBLE_WILDCARD)
}

#[inline]
fn is_wildcard_byte(b: u8) -> bool {
    matches!(b, b'*' | b'?' | b'{')
}

fn skip_separators(path: &str, pos: usize, separator: &str) -> usize {
    let rest = &path.as_bytes()[pos.min(path.len())..];
    let sep = separator.as_bytes();
    let mut skipped = 0usize;

    while rest[skipped..].starts_with(sep) {
        skipped += sep.len();
    }

    skipped
}

/// Length of the literal prefix of `segment` found at `pos`; 0 when the path
/// runs out first.
fn skip_segment(path: &str, pos: usize, segment: &str) -> usize {
    let path = path.as_bytes();
    let mut skipped = 0usize;

    for &b in segment.as_bytes() {
        if is_wildcard_byte(b) {
            return skipped;
        }

        match path.get(pos + skipped) {
            None => return 0,
            Some(&c) if c == b => skipped += 1,
            Some(_) => return skipped,
        }
    }

    skipped
}
