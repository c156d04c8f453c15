use ctf_kernel::host::{
    ClickEvent, ClickHandler, Clipboard, Dialogs, Document, Events, LocalBoxFuture, SubmitEvent,
    SubmitHandler, TimerCallback, Timers,
};
use ctf_kernel::prelude::{HostError, Selector};
use js_sys::{Function, Promise, Reflect};
use std::borrow::Cow;
use std::time::Duration;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    Window,
};

/// The live browser page.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
    document: web_sys::Document,
}

impl WebHost {
    /// Binds to the global `window`.
    ///
    /// # Errors
    /// Returns [`HostError::Dom`] outside a browser window context (e.g., in a worker).
    pub fn from_window() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or_else(|| HostError::Dom {
            message: "no global window".into(),
            context: Some("WebHost::from_window".into()),
        })?;
        let document = window.document().ok_or_else(|| HostError::Dom {
            message: "window has no document".into(),
            context: Some("WebHost::from_window".into()),
        })?;
        Ok(Self { window, document })
    }

    pub const fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn listen(
        target: &web_sys::EventTarget,
        kind: &str,
        listener: Closure<dyn FnMut(Event)>,
    ) -> Result<(), HostError> {
        target
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            .map_err(|err| HostError::Scheduling {
                message: js_message(&err),
                context: Some(format!("addEventListener('{kind}')").into()),
            })?;
        // Listeners live as long as the page.
        listener.forget();
        Ok(())
    }
}

impl Document for WebHost {
    type Node = Element;

    fn query(&self, selector: &Selector) -> Option<Element> {
        self.document.query_selector(&selector.to_string()).ok().flatten()
    }

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&selector.to_string()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_in(&self, scope: &Element, selector: &Selector) -> Option<Element> {
        scope.query_selector(&selector.to_string()).ok().flatten()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create_element(&self, tag: &str) -> Result<Element, HostError> {
        self.document.create_element(tag).map_err(|err| HostError::Dom {
            message: js_message(&err),
            context: Some(format!("createElement('{tag}')").into()),
        })
    }

    fn set_class_name(&self, node: &Element, class_name: &str) {
        node.set_class_name(class_name);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> Option<String> {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        node.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else {
            let toggled = if disabled {
                node.set_attribute("disabled", "")
            } else {
                node.remove_attribute("disabled")
            };
            if let Err(err) = toggled {
                warn!(err = %js_message(&err), disabled, "Could not toggle disabled attribute");
            }
        }
    }

    fn prepend(&self, parent: &Element, child: &Element) -> Result<(), HostError> {
        parent.insert_before(child, parent.first_child().as_ref()).map(|_| ()).map_err(|err| {
            HostError::Dom { message: js_message(&err), context: Some("insertBefore".into()) }
        })
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }
}

impl Events for WebHost {
    fn on_submit(&self, form: &Element, mut handler: SubmitHandler) -> Result<(), HostError> {
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let mut submit = SubmitEvent::new(event.default_prevented());
            handler(&mut submit);
            if submit.is_default_prevented() {
                event.prevent_default();
            }
        });
        Self::listen(form, "submit", listener)
    }

    fn on_click(&self, mut handler: ClickHandler<Element>) -> Result<(), HostError> {
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                handler(&ClickEvent { target });
            }
        });
        Self::listen(&self.document, "click", listener)
    }
}

impl Timers for WebHost {
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Result<(), HostError> {
        let callback = Closure::once_into_js(move || callback());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout_millis(delay),
            )
            .map(|_| ())
            .map_err(|err| HostError::Scheduling {
                message: js_message(&err),
                context: Some("setTimeout".into()),
            })
    }
}

impl Dialogs for WebHost {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

impl Clipboard for WebHost {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), HostError>> {
        match start_clipboard_write(&self.window, text) {
            Ok(promise) => Box::pin(async move {
                JsFuture::from(promise).await.map(|_| ()).map_err(|err| HostError::Clipboard {
                    message: js_message(&err),
                    context: Some("writeText".into()),
                })
            }),
            Err(err) => Box::pin(std::future::ready(Err(err))),
        }
    }
}

/// Calls `navigator.clipboard.writeText(text)`, looked up dynamically because the
/// API is missing on insecure origins.
fn start_clipboard_write(window: &Window, text: &str) -> Result<Promise, HostError> {
    let unavailable = |err: &JsValue| HostError::Clipboard {
        message: js_message(err),
        context: Some("navigator.clipboard".into()),
    };

    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|e| unavailable(&e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(HostError::Clipboard {
            message: "clipboard API is not available".into(),
            context: Some("navigator.clipboard".into()),
        });
    }

    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .and_then(<JsValue as JsCast>::dyn_into::<Function>)
        .map_err(|e| unavailable(&e))?;

    write
        .call1(&clipboard, &JsValue::from_str(text))
        .and_then(<JsValue as JsCast>::dyn_into::<Promise>)
        .map_err(|e| unavailable(&e))
}

fn timeout_millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Best-effort text of a thrown JavaScript value.
pub(crate) fn js_message(value: &JsValue) -> Cow<'static, str> {
    if let Some(text) = value.as_string() {
        return text.into();
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message()).into();
    }
    format!("{value:?}").into()
}
