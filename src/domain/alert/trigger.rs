//! Trigger events and the policy that turns them into alerts

use std::fmt;

use super::keywords::KeywordMatcher;

/// Something that happened in a terminal or task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A command or task finished. `exit_code` is `None` when the process
    /// was terminated by a signal.
    ProcessExited {
        label: Option<String>,
        exit_code: Option<i32>,
    },
    /// A chunk of text written to the terminal
    Output(String),
}

impl TriggerEvent {
    /// Shorthand for a process exit event
    pub fn exited(label: Option<String>, exit_code: Option<i32>) -> Self {
        Self::ProcessExited { label, exit_code }
    }

    /// Parse one line of an event stream.
    ///
    /// `exit <code> [label...]` is a process exit; anything else is output.
    pub fn parse_line(line: &str) -> Self {
        let mut parts = line.trim().splitn(3, char::is_whitespace);
        if let (Some("exit"), Some(code)) = (parts.next(), parts.next()) {
            if let Ok(code) = code.parse::<i32>() {
                let label = parts
                    .next()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string);
                return Self::ProcessExited {
                    label,
                    exit_code: Some(code),
                };
            }
        }
        Self::Output(line.to_string())
    }
}

/// Why an event counts as a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerReason {
    NonZeroExit { label: Option<String>, code: i32 },
    Keyword(String),
}

impl fmt::Display for TriggerReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonZeroExit {
                label: Some(label),
                code,
            } => write!(f, "'{}' exited with code {}", label, code),
            Self::NonZeroExit { label: None, code } => {
                write!(f, "command exited with code {}", code)
            }
            Self::Keyword(keyword) => write!(f, "output matched '{}'", keyword),
        }
    }
}

/// Decides which events deserve an alert.
///
/// Exit codes are always checked. Output text is only inspected when a
/// keyword matcher is configured.
#[derive(Debug, Clone, Default)]
pub struct TriggerPolicy {
    keywords: Option<KeywordMatcher>,
}

impl TriggerPolicy {
    /// Alert on non-zero exit codes only
    pub fn exit_code_only() -> Self {
        Self { keywords: None }
    }

    /// Also alert when output matches one of the keywords
    pub fn with_keywords(matcher: KeywordMatcher) -> Self {
        Self {
            keywords: Some(matcher),
        }
    }

    pub fn keyword_detection(&self) -> bool {
        self.keywords.is_some()
    }

    /// The reason `event` is a failure, or `None` if it is not
    pub fn classify(&self, event: &TriggerEvent) -> Option<TriggerReason> {
        match event {
            TriggerEvent::ProcessExited {
                label,
                exit_code: Some(code),
            } if *code != 0 => Some(TriggerReason::NonZeroExit {
                label: label.clone(),
                code: *code,
            }),
            TriggerEvent::ProcessExited { .. } => None,
            TriggerEvent::Output(text) => self
                .keywords
                .as_ref()
                .and_then(|m| m.find(text))
                .map(|k| TriggerReason::Keyword(k.to_string())),
        }
    }

    pub fn is_failure(&self, event: &TriggerEvent) -> bool {
        self.classify(event).is_some()
    }
}
