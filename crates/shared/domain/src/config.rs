use crate::constants::{
    CHALLENGE_CARD_CLASS, CONFIRM_DELETE_MESSAGE, CONTAINER_SELECTOR, COPIED_MESSAGE,
    FLAG_FORM_CLASS, FLAG_FORMAT_MESSAGE, FLAG_INPUT_ID, FLASH_DURATION_MS, FORM_SELECTOR,
    SUBMITTING_LABEL,
};
use crate::selector::Selector;
use serde::Deserialize;
use std::borrow::Cow;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

#[ctf_derive::ctf_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Page wiring and copy used by the client behaviors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfigInner {
    /// Where flash messages are prepended; the body is used when nothing matches.
    pub container_selector: Selector,
    pub flag_form_selector: Selector,
    pub form_selector: Selector,
    pub submit_button_selector: Selector,
    pub flag_input_id: String,
    pub challenge_card_class: String,
    pub flash_duration_ms: u64,
    pub messages: Messages,
}

/// User-facing strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub flag_format: String,
    pub copied: String,
    pub submitting: String,
    pub confirm_delete: String,
}

/// Thin Arc-wrapped config, cloned into every event handler.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(flatten, default)]
    inner: Arc<UiConfigInner>,
}

impl UiConfig {
    /// Parses a (possibly partial) JSON document; omitted fields keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed JSON or an unsupported selector.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).context("Failed to parse UI config")
    }

    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_duration_ms)
    }
}

impl Deref for UiConfig {
    type Target = UiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for UiConfig {
    fn deref_mut(&mut self) -> &mut UiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

// --- Default ---

impl Default for UiConfigInner {
    fn default() -> Self {
        Self {
            container_selector: Selector::tag(CONTAINER_SELECTOR),
            flag_form_selector: Selector::class(FLAG_FORM_CLASS),
            form_selector: Selector::tag(FORM_SELECTOR),
            submit_button_selector: Selector::attribute("button", "type", "submit"),
            flag_input_id: FLAG_INPUT_ID.to_owned(),
            challenge_card_class: CHALLENGE_CARD_CLASS.to_owned(),
            flash_duration_ms: FLASH_DURATION_MS,
            messages: Messages::default(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            flag_format: FLAG_FORMAT_MESSAGE.to_owned(),
            copied: COPIED_MESSAGE.to_owned(),
            submitting: SUBMITTING_LABEL.to_owned(),
            confirm_delete: CONFIRM_DELETE_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUBMIT_BUTTON_SELECTOR;

    #[test]
    fn test_defaults_match_constants() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.container_selector.to_string(), CONTAINER_SELECTOR);
        assert_eq!(cfg.flag_form_selector.to_string(), ".flag-form");
        assert_eq!(cfg.submit_button_selector.to_string(), SUBMIT_BUTTON_SELECTOR);
        assert_eq!(cfg.flash_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_deref_mut_copies_on_write() {
        let shared = UiConfig::default();
        let mut tuned = shared.clone();
        tuned.flash_duration_ms = 10;

        assert_eq!(shared.flash_duration_ms, FLASH_DURATION_MS);
        assert_eq!(tuned.flash_duration(), Duration::from_millis(10));
    }
}
