//! Keyword matching over terminal output

/// Keywords that flag terminal output as an error
pub const DEFAULT_ERROR_KEYWORDS: &[&str] = &[
    "error",
    "command not found",
    "not recognized",
    "failed",
    "exception",
    "denied",
    "fatal",
];

/// Case-insensitive substring matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    /// Build a matcher; blank keywords are dropped
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// The first keyword contained in `text`, if any
    pub fn find(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .find(|k| haystack.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_KEYWORDS)
    }
}
