use crate::constants::{FLAG_PREFIX, FLAG_SUFFIX};
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

/// `.` in browser regular expressions stops at these line terminators, so the payload does too.
static FLAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^AITCTF\{[^\n\r\x{2028}\x{2029}]*\}$")
        .expect("CRITICAL: flag pattern must be a valid regular expression")
});

#[ctf_derive::ctf_error]
pub enum FlagError {
    #[error("Invalid flag format{}: {message}", format_context(.context))]
    Format { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Returns `true` when the whole input is a well-formed `AITCTF{...}` flag.
///
/// The check is case-sensitive and anchored at both ends; the payload may be empty.
///
/// ```rust
/// use ctf_domain::validate_flag;
///
/// assert!(validate_flag("AITCTF{abc}"));
/// assert!(validate_flag("AITCTF{}"));
/// assert!(!validate_flag("aitctf{abc}"));
/// assert!(!validate_flag("AITCTF{abc}x"));
/// ```
pub fn validate_flag(flag: &str) -> bool {
    FLAG_PATTERN.is_match(flag)
}

/// A flag that passed [`validate_flag`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag(String);

impl Flag {
    /// Validates `raw` and wraps it. The input is taken verbatim, without trimming.
    ///
    /// # Errors
    /// Returns [`FlagError::Format`] when `raw` is not an `AITCTF{...}` flag.
    pub fn parse(raw: impl Into<String>) -> Result<Self, FlagError> {
        let raw = raw.into();
        if validate_flag(&raw) {
            Ok(Self(raw))
        } else {
            Err(FlagError::Format {
                message: format!("expected {FLAG_PREFIX}...{FLAG_SUFFIX}").into(),
                context: None,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text between the braces.
    pub fn payload(&self) -> &str {
        &self.0[FLAG_PREFIX.len()..self.0.len() - FLAG_SUFFIX.len()]
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Flag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Flag {
    type Error = FlagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
