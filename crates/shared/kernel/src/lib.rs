//! Kernel of the CTF client.
//! Keep this crate lightweight: it defines the host seams every behavior is written
//! against, plus an in-memory host (behind the `testing` feature) that runs the same
//! behaviors without a browser.
//!
//! ## Host seams
//! * [`host::Document`]: element lookup and mutation.
//! * [`host::Events`]: submit and click listeners, fired in registration order.
//! * [`host::Timers`]: one-shot timers, no cancellation.
//! * [`host::Dialogs`]: the blocking confirmation prompt.
//! * [`host::Clipboard`]: asynchronous clipboard writes.
//!
//! [`config::load_config`] turns the page's embedded config block into a [`domain::UiConfig`].
//!
//! ## Example
//! ```rust
//! # #[cfg(feature = "testing")]
//! # {
//! use ctf_kernel::memory::{ElementSpec, MemoryHost};
//! use ctf_kernel::prelude::*;
//!
//! let host = MemoryHost::new();
//! let main = host.append(host.root(), ElementSpec::new("main"));
//! assert_eq!(host.query(&Selector::tag("main")), Some(main));
//! # }
//! ```

pub mod config;
mod error;
pub mod host;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod prelude;

pub use ctf_domain as domain;
pub use error::{HostError, HostErrorExt};
