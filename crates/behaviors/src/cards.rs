use crate::Behaviors;
use ctf_kernel::prelude::*;
use tracing::trace;

impl<H: Host> Behaviors<H> {
    pub(crate) fn watch_challenge_cards(&self) -> Result<(), HostError> {
        let ui = self.clone();
        self.host.on_click(Box::new(move |event: &ClickEvent<H::Node>| ui.on_page_click(event)))
    }

    fn on_page_click(&self, event: &ClickEvent<H::Node>) {
        if self.host.has_class(&event.target, &self.config.challenge_card_class) {
            self.on_challenge_card_click(&event.target);
        }
    }

    /// Hook for challenge card interactions such as expand/collapse. Does nothing yet.
    #[allow(clippy::unused_self)]
    fn on_challenge_card_click(&self, card: &H::Node) {
        trace!(?card, "Challenge card clicked");
    }
}
