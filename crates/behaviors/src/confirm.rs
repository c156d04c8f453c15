use crate::Behaviors;
use ctf_kernel::prelude::*;

impl<H: Host> Behaviors<H> {
    /// Asks the user to confirm a destructive action; blocks until answered.
    ///
    /// `None` uses the configured default prompt.
    pub fn confirm_delete(&self, message: Option<&str>) -> bool {
        let message = message.unwrap_or(&self.config.messages.confirm_delete);
        self.host.confirm(message)
    }
}
