use crate::Behaviors;
use ctf_domain::constants::FLASH_TAG;
use ctf_kernel::prelude::*;
use tracing::{debug, warn};

impl<H: Host> Behaviors<H> {
    /// Prepends a flash message to the content container (or the body) and removes it
    /// once the configured window has passed.
    ///
    /// Never fails: host errors are logged and the message is dropped.
    pub fn show_flash_message(&self, message: impl Into<String>, severity: impl Into<Severity>) {
        let flash = FlashMessage::new(message, severity);
        if let Err(err) = self.try_show_flash(&flash) {
            warn!(%err, severity = %flash.severity, "Flash message not shown");
        }
    }

    fn try_show_flash(&self, flash: &FlashMessage) -> Result<(), HostError> {
        let host = &self.host;

        let node = host.create_element(FLASH_TAG).context("Creating flash element")?;
        host.set_class_name(&node, &flash.class_name());
        host.set_text(&node, &flash.text);

        let container = host
            .query(&self.config.container_selector)
            .or_else(|| host.body())
            .ok_or_else(|| HostError::Dom {
                message: "document has neither a content container nor a body".into(),
                context: None,
            })?;
        host.prepend(&container, &node).context("Inserting flash element")?;

        let remover = host.clone();
        let target = node.clone();
        let scheduled = host.set_timeout(
            self.config.flash_duration(),
            Box::new(move || remover.remove(&target)),
        );
        if let Err(err) = scheduled {
            // Without a timer the message would stay forever.
            host.remove(&node);
            return Err::<(), _>(err).context("Scheduling flash removal");
        }

        debug!(severity = %flash.severity, "Flash message shown");
        Ok(())
    }
}
