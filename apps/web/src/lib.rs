//! # CTF Web Client
//!
//! Browser entry point. On load the logger is installed and, once the document is
//! parsed, every behavior is wired against the live page. The exported functions are
//! the page's inline-handler API:
//!
//! ```html
//! <button onclick="return ctf.confirmDelete()">Delete</button>
//! <button onclick="ctf.copyToClipboard('AITCTF{...}')">Copy</button>
//! ```

mod config;
mod host;

pub use crate::host::WebHost;

use ctf_behaviors::Behaviors;
use ctf_logger::{LevelFilter, Logger};
use std::cell::OnceCell;
use tracing::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{DocumentReadyState, Event};

thread_local! {
    static BEHAVIORS: OnceCell<Behaviors<WebHost>> = const { OnceCell::new() };
}

/// The page's behaviors. They are cached once the document is parsed, so a config block
/// anywhere in the page is seen; earlier calls get a fresh, uncached instance.
fn behaviors() -> Result<Behaviors<WebHost>, JsValue> {
    BEHAVIORS.with(|cell| {
        if let Some(ready) = cell.get() {
            return Ok(ready.clone());
        }
        let host = WebHost::from_window().map_err(|err| JsValue::from_str(&err.to_string()))?;
        let parsed = is_parsed(host.document().ready_state());
        let config = config::load_config(host.document());
        let ui = Behaviors::new(host, config);
        if parsed { Ok(cell.get_or_init(|| ui).clone()) } else { Ok(ui) }
    })
}

/// Whether the whole document, including a trailing config block, has been parsed.
fn is_parsed(state: DocumentReadyState) -> bool {
    state != DocumentReadyState::Loading
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if let Err(err) = Logger::builder().name("ctf-web").level(LevelFilter::INFO).init() {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let host = WebHost::from_window().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let document = host.document();
    if is_parsed(document.ready_state()) {
        wire();
    } else {
        let on_ready = Closure::once_into_js(|_: Event| wire());
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    }
    Ok(())
}

fn wire() {
    let ui = match behaviors() {
        Ok(ui) => ui,
        Err(err) => {
            error!(?err, "Page host unavailable");
            return;
        },
    };
    match ui.init() {
        Ok(wiring) => info!(flag_form = wiring.flag_form, forms = wiring.forms, "Page wired"),
        Err(err) => error!(%err, "Page wiring failed"),
    }
}

/// Shows a transient message; `kind` defaults to `info`.
#[wasm_bindgen(js_name = showFlashMessage)]
pub fn show_flash_message(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    behaviors()?.show_flash_message(message, kind.as_deref());
    Ok(())
}

/// Native confirmation prompt; returns whether the user accepted.
#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(message: Option<String>) -> Result<bool, JsValue> {
    Ok(behaviors()?.confirm_delete(message.as_deref()))
}

#[wasm_bindgen(js_name = validateFlag)]
pub fn validate_flag(value: &str) -> bool {
    ctf_behaviors::validate_flag(value)
}

/// Writes `text` to the clipboard; the promise always resolves.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) -> Result<js_sys::Promise, JsValue> {
    let ui = behaviors()?;
    Ok(future_to_promise(async move {
        ui.copy_to_clipboard(&text).await;
        Ok(JsValue::UNDEFINED)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behaviors_are_not_cached_while_loading() {
        assert!(!is_parsed(DocumentReadyState::Loading));
        assert!(is_parsed(DocumentReadyState::Interactive));
        assert!(is_parsed(DocumentReadyState::Complete));
    }
}
