/// Separator-derived suffixes, built once per matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorPatterns {
    separator: Box<str>,
    ends_on_wildcard: Box<str>,
    ends_on_double_wildcard: Box<str>,
}

impl SeparatorPatterns {
    pub fn new(separator: &str) -> Self {
        Self {
            separator: separator.into(),
            ends_on_wildcard: format!("{separator}*").into_boxed_str(),
            ends_on_double_wildcard: format!("{separator}**").into_boxed_str(),
        }
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// `/*`
    #[inline]
    pub fn ends_on_wildcard(&self) -> &str {
        &self.ends_on_wildcard
    }

    /// `/**`, which is also the catch-all pattern.
    #[inline]
    pub fn ends_on_double_wildcard(&self) -> &str {
        &self.ends_on_double_wildcard
    }
}
