use crate::Behaviors;
use ctf_domain::validate_flag;
use ctf_kernel::prelude::*;
use tracing::debug;

impl<H: Host> Behaviors<H> {
    /// Cancels the flag form's submission unless the flag input holds a well-formed flag.
    pub(crate) fn guard_flag_form(&self, form: &H::Node) -> Result<(), HostError> {
        let ui = self.clone();
        self.host.on_submit(form, Box::new(move |event: &mut SubmitEvent| ui.check_flag(event)))
    }

    fn check_flag(&self, event: &mut SubmitEvent) {
        let value = self
            .host
            .element_by_id(&self.config.flag_input_id)
            .and_then(|input| self.host.value(&input));

        if value.as_deref().is_some_and(validate_flag) {
            debug!("Flag format accepted");
            return;
        }

        // A missing input blocks the submission too.
        debug!(input_found = value.is_some(), "Flag submission blocked");
        event.prevent_default();
        self.show_flash_message(self.config.messages.flag_format.as_str(), Severity::Error);
    }

    /// Locks the form's submit button once the form is submitted.
    ///
    /// Runs whatever earlier listeners decided; it never cancels the submission itself.
    pub(crate) fn lock_on_submit(&self, form: &H::Node) -> Result<(), HostError> {
        let ui = self.clone();
        let owner = form.clone();
        self.host.on_submit(form, Box::new(move |_: &mut SubmitEvent| ui.lock_submit_button(&owner)))
    }

    fn lock_submit_button(&self, form: &H::Node) {
        let Some(button) = self.host.query_in(form, &self.config.submit_button_selector) else {
            return;
        };
        self.host.set_text(&button, &self.config.messages.submitting);
        self.host.set_disabled(&button, true);
    }
}
