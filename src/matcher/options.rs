use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PATH_SEPARATOR: &str = "/";

/// How the compilation caches behave.
///
/// `Auto` caches until either cache reaches the turn-off threshold and then
/// disables itself for good; the forced modes never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CacheMode {
    #[default]
    Auto,
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MatcherOptions {
    pub separator: String,
    pub case_sensitive: bool,
    pub trim_tokens: bool,
    pub cache_mode: CacheMode,
    /// Literal-prefix fast reject ahead of tokenizing the path. Never changes
    /// results.
    pub potential_match_precheck: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_PATH_SEPARATOR.to_string(),
            case_sensitive: true,
            trim_tokens: false,
            cache_mode: CacheMode::default(),
            potential_match_precheck: true,
        }
    }
}

impl MatcherOptions {
    pub fn builder() -> MatcherOptionsBuilder {
        MatcherOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), MatcherOptionsError> {
        if self.separator.is_empty() {
            return Err(MatcherOptionsError::EmptySeparator);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MatcherOptionsBuilder {
    options: MatcherOptions,
}

impl MatcherOptionsBuilder {
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.options.separator = separator.into();
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn trim_tokens(mut self, value: bool) -> Self {
        self.options.trim_tokens = value;
        self
    }

    pub fn cache_mode(mut self, value: CacheMode) -> Self {
        self.options.cache_mode = value;
        self
    }

    pub fn potential_match_precheck(mut self, value: bool) -> Self {
        self.options.potential_match_precheck = value;
        self
    }

    pub fn build(self) -> Result<MatcherOptions, MatcherOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatcherOptionsError {
    #[error("path separator must not be empty")]
    EmptySeparator,
}
