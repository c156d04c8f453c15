//! # Client Behaviors
//!
//! Progressive enhancements for the CTF platform pages:
//!
//! * **Flash messages** that remove themselves after a fixed window.
//! * **Delete confirmation** through the native dialog.
//! * **Flag format check** before the flag form is submitted.
//! * **Submit locking**: submit buttons turn into `Submitting...` and are disabled.
//! * **Clipboard copy** with a success notice.
//! * **Challenge card** click hook (currently inert).
//!
//! Everything is written against [`ctf_kernel::host::Host`], so the same code drives
//! the browser and the in-memory test host.
//!
//! ## Example
//!
//! ```rust
//! use ctf_behaviors::Behaviors;
//! use ctf_kernel::memory::{ElementSpec, MemoryHost};
//! use ctf_kernel::prelude::*;
//!
//! let host = MemoryHost::new();
//! let main = host.append(host.root(), ElementSpec::new("main"));
//!
//! let ui = Behaviors::new(host.clone(), UiConfig::default());
//! ui.init()?;
//! ui.show_flash_message("Welcome back", Severity::Info);
//!
//! assert_eq!(host.children(main).len(), 1);
//! # Ok::<(), ctf_kernel::HostError>(())
//! ```

mod cards;
mod clipboard;
mod confirm;
mod flash;
mod forms;
mod wiring;

pub use ctf_domain::validate_flag;
pub use wiring::Wiring;

use ctf_kernel::domain::UiConfig;
use ctf_kernel::host::Host;

/// The page's behaviors, bound to a host and a configuration.
///
/// Cloning is cheap; every registered listener owns a clone.
#[derive(Debug, Clone)]
pub struct Behaviors<H: Host> {
    host: H,
    config: UiConfig,
}

impl<H: Host> Behaviors<H> {
    pub const fn new(host: H, config: UiConfig) -> Self {
        Self { host, config }
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub const fn config(&self) -> &UiConfig {
        &self.config
    }
}
