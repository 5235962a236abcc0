use super::SeparatorPatterns;
use crate::errors::{PathMatchError, PathMatchResult};
use crate::path::has_text;

/// Merges two pattern fragments, e.g. a base path and a sub-path.
///
/// `matches` decides whether `pattern1` already covers `pattern2` taken as a
/// path, in which case `pattern2` wins outright.
#[tracing::instrument(level = "trace", skip(separators, matches))]
pub(crate) fn combine_patterns<F>(
    pattern1: &str,
    pattern2: &str,
    separators: &SeparatorPatterns,
    matches: F,
) -> PathMatchResult<String>
where
    F: FnOnce(&str, &str) -> PathMatchResult<bool>,
{
    match (has_text(pattern1), has_text(pattern2)) {
        (false, false) => return Ok(String::new()),
        (false, true) => return Ok(pattern2.to_string()),
        (true, false) => return Ok(pattern1.to_string()),
        (true, true) => {}
    }

    let separator = separators.separator();
    let pattern1_has_var = pattern1.contains('{');

    // /* + /hotel -> /hotel, /*.* + /*.html -> /*.html
    if pattern1 != pattern2 && !pattern1_has_var && matches(pattern1, pattern2)? {
        return Ok(pattern2.to_string());
    }

    // /hotels/* + booking -> /hotels/booking
    if let Some(base) = pattern1.strip_suffix(separators.ends_on_wildcard()) {
        return Ok(concat(base, pattern2, separator));
    }

    // /hotels/** + booking -> /hotels/**/booking
    if pattern1.ends_with(separators.ends_on_double_wildcard()) {
        return Ok(concat(pattern1, pattern2, separator));
    }

    let star_dot = match pattern1.find("*.") {
        Some(pos) if !pattern1_has_var && separator != "." => pos,
        _ => return Ok(concat(pattern1, pattern2, separator)),
    };

    let ext1 = &pattern1[star_dot + 1..];
    let (file2, ext2) = match pattern2.find('.') {
        Some(dot) => pattern2.split_at(dot),
        None => (pattern2, ""),
    };

    let ext1_any = ext1.is_empty() || ext1 == ".*";
    let ext2_any = ext2.is_empty() || ext2 == ".*";

    if !ext1_any && !ext2_any {
        return Err(PathMatchError::IncompatibleExtensions {
            pattern1: pattern1.to_string(),
            pattern2: pattern2.to_string(),
        });
    }

    let ext = if ext1_any { ext2 } else { ext1 };

    Ok(format!("{file2}{ext}"))
}

fn concat(path1: &str, path2: &str, separator: &str) -> String {
    let ends = path1.ends_with(separator);
    let starts = path2.starts_with(separator);

    match (ends, starts) {
        (true, true) => format!("{}{}", path1, &path2[separator.len()..]),
        (true, false) | (false, true) => format!("{path1}{path2}"),
        (false, false) => format!("{path1}{separator}{path2}"),
    }
}
