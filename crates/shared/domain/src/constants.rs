/// Opening envelope of every flag.
pub const FLAG_PREFIX: &str = "AITCTF{";
/// Closing envelope of every flag.
pub const FLAG_SUFFIX: &str = "}";

/// Base class shared by every flash message element.
pub const FLASH_CLASS: &str = "flash";
/// Tag used for flash message elements.
pub const FLASH_TAG: &str = "div";
/// Display window of a flash message, in milliseconds.
pub const FLASH_DURATION_MS: u64 = 5000;

pub const FLAG_FORMAT_MESSAGE: &str = "Flag must be in the format: AITCTF{flag_here}";
pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";

pub const CONTAINER_SELECTOR: &str = "main";
pub const FLAG_FORM_CLASS: &str = "flag-form";
pub const FORM_SELECTOR: &str = "form";
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
pub const FLAG_INPUT_ID: &str = "flag";
pub const CHALLENGE_CARD_CLASS: &str = "challenge-card";

/// Id of the optional `<script type="application/json">` element carrying [`crate::UiConfig`].
pub const CONFIG_ELEMENT_ID: &str = "ctf-ui-config";
