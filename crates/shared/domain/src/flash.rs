use crate::constants::FLASH_CLASS;
use std::fmt;

/// Visual style of a flash message.
///
/// Only the style class depends on it. Unknown tags are kept as [`Severity::Other`] and
/// produce a class the stylesheet may not know about, which is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Danger,
    Warning,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s {
            "info" => Self::Info,
            "success" => Self::Success,
            "error" => Self::Error,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<Option<&str>> for Severity {
    fn from(s: Option<&str>) -> Self {
        s.map_or_else(Self::default, Self::from)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient notice shown at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub severity: Severity,
}

impl FlashMessage {
    pub fn new(text: impl Into<String>, severity: impl Into<Severity>) -> Self {
        Self { text: text.into(), severity: severity.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    /// Full class attribute, e.g. `flash flash-error`.
    pub fn class_name(&self) -> String {
        format!("{FLASH_CLASS} {FLASH_CLASS}-{}", self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for tag in ["info", "success", "error", "danger", "warning"] {
            assert_eq!(Severity::from(tag).as_str(), tag);
        }
        assert_eq!(Severity::from("error"), Severity::Error);
    }

    #[test]
    fn test_unknown_tag_is_kept_verbatim() {
        let severity = Severity::from("sparkly");
        assert_eq!(severity, Severity::Other("sparkly".to_owned()));
        assert_eq!(FlashMessage::new("hi", severity).class_name(), "flash flash-sparkly");
    }

    #[test]
    fn test_missing_tag_defaults_to_info() {
        assert_eq!(Severity::from(None::<&str>), Severity::Info);
        assert_eq!(FlashMessage::new("x", None::<&str>).class_name(), "flash flash-info");
    }

    #[test]
    fn test_class_name() {
        assert_eq!(FlashMessage::error("hello").class_name(), "flash flash-error");
        assert_eq!(FlashMessage::success("ok").class_name(), "flash flash-success");
    }
}
