use std::collections::BTreeSet;

/// The raw string patterns recognized as "no answer".
///
/// Matching is exact, case-sensitive, and untrimmed unless the relaxations
/// are switched on explicitly. The empty string is deliberately absent from
/// the standard set: some providers use `""` for skipped questions, others
/// for legitimately blank free-text fields, so treating it as missing is an
/// opt-in choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValueRules {
    tokens: BTreeSet<String>,
    ignore_case: bool,
    trim_whitespace: bool,
}

impl Default for MissingValueRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl MissingValueRules {
    /// The provider-documented encodings: `NA` and `N/A`.
    pub fn standard() -> Self {
        let mut tokens = BTreeSet::new();
        tokens.insert("NA".to_string());
        tokens.insert("N/A".to_string());
        Self {
            tokens,
            ignore_case: false,
            trim_whitespace: false,
        }
    }

    /// A rule set with no tokens at all.
    pub fn empty() -> Self {
        Self {
            tokens: BTreeSet::new(),
            ignore_case: false,
            trim_whitespace: false,
        }
    }

    /// Add a token to the set.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.tokens.insert(token.into());
        self
    }

    /// Treat the empty string as missing (disabled by default).
    pub fn with_empty_as_missing(mut self, enable: bool) -> Self {
        if enable {
            self.tokens.insert(String::new());
        } else {
            self.tokens.remove("");
        }
        self
    }

    /// Match tokens case-insensitively (disabled by default).
    pub fn with_ignore_case(mut self, enable: bool) -> Self {
        self.ignore_case = enable;
        self
    }

    /// Trim surrounding whitespace from cells before matching (disabled by
    /// default).
    pub fn with_trim_whitespace(mut self, enable: bool) -> Self {
        self.trim_whitespace = enable;
        self
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decide whether a raw cell string denotes "no answer".
    pub fn matches(&self, raw: &str) -> bool {
        let candidate = if self.trim_whitespace { raw.trim() } else { raw };
        if self.ignore_case {
            self.tokens
                .iter()
                .any(|token| token.eq_ignore_ascii_case(candidate))
        } else {
            self.tokens.contains(candidate)
        }
    }
}
