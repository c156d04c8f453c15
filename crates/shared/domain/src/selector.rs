//! A deliberately small subset of CSS selectors.
//!
//! The client only ever looks elements up by tag, class, id or a single attribute
//! equality, so that is all [`Selector`] can express. Keeping it this small lets
//! non-browser hosts match elements without a CSS engine.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[ctf_derive::ctf_error]
pub enum SelectorError {
    #[error("Unsupported selector{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Selector {
    /// `main`
    Tag(String),
    /// `.flag-form`
    Class(String),
    /// `#flag`
    Id(String),
    /// `button[type="submit"]`
    Attribute { tag: String, name: String, value: String },
}

impl Selector {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn attribute(
        tag: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Attribute { tag: tag.into(), name: name.into(), value: value.into() }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => f.write_str(tag),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Id(id) => write!(f, "#{id}"),
            Self::Attribute { tag, name, value } => write!(f, "{tag}[{name}=\"{value}\"]"),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(class) = s.strip_prefix('.') {
            return Ok(Self::Class(identifier(class, s)?.to_owned()));
        }
        if let Some(id) = s.strip_prefix('#') {
            return Ok(Self::Id(identifier(id, s)?.to_owned()));
        }
        if let Some((tag, rest)) = s.split_once('[') {
            let body = rest.strip_suffix(']').ok_or_else(|| unsupported(s, "unclosed '['"))?;
            let (name, value) =
                body.split_once('=').ok_or_else(|| unsupported(s, "expected name=value"))?;
            return Ok(Self::Attribute {
                tag: identifier(tag, s)?.to_ascii_lowercase(),
                name: identifier(name.trim(), s)?.to_owned(),
                value: unquote(value.trim()).to_owned(),
            });
        }

        Ok(Self::Tag(identifier(s, s)?.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Selector {
    type Error = SelectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn identifier<'a>(part: &'a str, whole: &str) -> Result<&'a str, SelectorError> {
    let valid = !part.is_empty()
        && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid { Ok(part) } else { Err(unsupported(whole, "expected a plain identifier")) }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}

fn unsupported(selector: &str, reason: &'static str) -> SelectorError {
    SelectorError::Unsupported { message: format!("'{selector}'").into(), context: Some(reason.into()) }
}
