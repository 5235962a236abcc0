use memchr::memmem;

/// Splits `input` on every occurrence of `separator`.
///
/// With `trim_tokens` each token is whitespace-trimmed; with `ignore_empty`
/// zero-length tokens (repeated, leading or trailing separators) are dropped.
#[tracing::instrument(level = "trace", skip_all, fields(input = %input, separator = %separator))]
pub fn tokenize<'a>(
    input: &'a str,
    separator: &str,
    trim_tokens: bool,
    ignore_empty: bool,
) -> Vec<&'a str> {
    let mut tokens = Vec::new();

    if separator.is_empty() {
        push_token(&mut tokens, input, trim_tokens, ignore_empty);
        return tokens;
    }

    let mut start = 0usize;

    for pos in memmem::find_iter(input.as_bytes(), separator.as_bytes()) {
        push_token(&mut tokens, &input[start..pos], trim_tokens, ignore_empty);
        start = pos + separator.len();
    }

    push_token(&mut tokens, &input[start..], trim_tokens, ignore_empty);

    tokens
}

#[inline]
fn push_token<'a>(tokens: &mut Vec<&'a str>, token: &'a str, trim: bool, ignore_empty: bool) {
    let token = if trim { token.trim() } else { token };

    if ignore_empty && token.is_empty() {
        return;
    }

    tokens.push(token);
}

/// True when `s` holds at least one non-whitespace character.
#[inline]
pub fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}
