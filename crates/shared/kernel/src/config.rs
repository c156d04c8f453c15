use ctf_domain::UiConfig;
use tracing::{debug, warn};

/// Builds the page's [`UiConfig`] from the text of its embedded config block.
///
/// A missing or blank block yields the defaults. A malformed one is logged and the
/// defaults are used, so a broken block never disables the page behaviors.
///
/// # Example
/// ```rust
/// use ctf_kernel::config::load_config;
///
/// let cfg = load_config(Some(r#"{ "flash_duration_ms": 8000 }"#));
/// assert_eq!(cfg.flash_duration_ms, 8000);
/// assert_eq!(load_config(None).flash_duration_ms, 5000);
/// ```
pub fn load_config(raw: Option<&str>) -> UiConfig {
    let Some(raw) = raw.filter(|text| !text.trim().is_empty()) else {
        debug!("No page UI config, using defaults");
        return UiConfig::default();
    };
    UiConfig::from_json(raw).unwrap_or_else(|err| {
        warn!(%err, "Ignoring page UI config");
        UiConfig::default()
    })
}
