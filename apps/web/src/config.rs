use ctf_domain::UiConfig;
use ctf_domain::constants::CONFIG_ELEMENT_ID;

/// Reads the page's `<script type="application/json" id="ctf-ui-config">` block.
pub(crate) fn load_config(document: &web_sys::Document) -> UiConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    ctf_kernel::config::load_config(raw.as_deref())
}
