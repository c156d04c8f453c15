use crate::error::HostError;
use ctf_domain::Selector;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A `!Send` boxed future; every host lives on a single-threaded event loop.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

pub type SubmitHandler = Box<dyn FnMut(&mut SubmitEvent)>;
pub type ClickHandler<N> = Box<dyn FnMut(&ClickEvent<N>)>;
pub type TimerCallback = Box<dyn FnOnce()>;

/// Element lookup and mutation.
///
/// Handles are cheap to clone and compare; lookups only see elements attached to the page.
pub trait Document {
    type Node: Clone + Debug + 'static;

    /// First match in document order.
    fn query(&self, selector: &Selector) -> Option<Self::Node>;

    /// Every match in document order.
    fn query_all(&self, selector: &Selector) -> Vec<Self::Node>;

    /// First match among the descendants of `scope`.
    fn query_in(&self, scope: &Self::Node, selector: &Selector) -> Option<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    /// Creates a detached element.
    ///
    /// # Errors
    /// Returns [`HostError::Dom`] if the host refuses the tag.
    fn create_element(&self, tag: &str) -> Result<Self::Node, HostError>;

    fn set_class_name(&self, node: &Self::Node, class_name: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_text(&self, node: &Self::Node, text: &str);

    /// Current value of a form control, `None` for elements without one.
    fn value(&self, node: &Self::Node) -> Option<String>;

    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    /// Inserts `child` before the current first child of `parent`.
    ///
    /// # Errors
    /// Returns [`HostError::Dom`] if the insertion is rejected.
    fn prepend(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;

    /// Detaches `node`; a no-op when it is already detached.
    fn remove(&self, node: &Self::Node);
}

/// Listener registration. Listeners on one target fire in registration order.
pub trait Events: Document {
    /// # Errors
    /// Returns [`HostError::Scheduling`] if the listener cannot be attached.
    fn on_submit(&self, form: &Self::Node, handler: SubmitHandler) -> Result<(), HostError>;

    /// Registers a page-wide click listener.
    ///
    /// # Errors
    /// Returns [`HostError::Scheduling`] if the listener cannot be attached.
    fn on_click(&self, handler: ClickHandler<Self::Node>) -> Result<(), HostError>;
}

pub trait Timers {
    /// Runs `callback` once after `delay`. There is no way to cancel it.
    ///
    /// # Errors
    /// Returns [`HostError::Scheduling`] if the timer cannot be armed.
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Result<(), HostError>;
}

pub trait Dialogs {
    /// Blocks until the user answers; `true` means confirmed.
    fn confirm(&self, message: &str) -> bool;
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), HostError>>;
}

/// Everything a behavior may need from the page.
pub trait Host: Events + Timers + Dialogs + Clipboard + Clone + 'static {}

impl<T> Host for T where T: Events + Timers + Dialogs + Clipboard + Clone + 'static {}

/// The part of a submit event a listener may act on.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub const fn new(default_prevented: bool) -> Self {
        Self { default_prevented }
    }

    /// Cancels the form submission. Later listeners still run.
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A click as seen by the page-wide listener.
#[derive(Debug, Clone)]
pub struct ClickEvent<N> {
    pub target: N,
}
