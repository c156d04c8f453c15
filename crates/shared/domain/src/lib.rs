//! # Domain Models
//!
//! Pure types for the CTF client: flag format, flash messages, element selectors and
//! the UI configuration. No DOM access and no I/O live here.

pub mod config;
pub mod constants;
pub mod flag;
pub mod flash;
pub mod selector;

pub use config::{ConfigError, Messages, UiConfig};
pub use flag::{Flag, FlagError, validate_flag};
pub use flash::{FlashMessage, Severity};
pub use selector::{Selector, SelectorError};
