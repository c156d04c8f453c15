pub use crate::domain::{FlashMessage, Selector, Severity, UiConfig};
pub use crate::error::{HostError, HostErrorExt};
pub use crate::host::{
    ClickEvent, Clipboard, Dialogs, Document, Events, Host, LocalBoxFuture, SubmitEvent, Timers,
};
