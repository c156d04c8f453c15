use crate::Behaviors;
use ctf_kernel::prelude::*;
use tracing::error;

impl<H: Host> Behaviors<H> {
    /// Writes `text` to the clipboard and confirms with a success flash.
    ///
    /// A failed write is only logged; the user sees nothing and the caller gets nothing.
    pub async fn copy_to_clipboard(&self, text: &str) {
        match self.host.write_text(text).await {
            Ok(()) => {
                self.show_flash_message(self.config.messages.copied.as_str(), Severity::Success);
            },
            Err(err) => error!("Could not copy text: {err}"),
        }
    }
}
