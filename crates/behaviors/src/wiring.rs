use crate::Behaviors;
use ctf_kernel::prelude::*;
use tracing::debug;

/// What [`Behaviors::init`] found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    pub flag_form: bool,
    pub forms: usize,
}

impl<H: Host> Behaviors<H> {
    /// Attaches every listener. Call once, after the document is parsed.
    ///
    /// The flag check is registered before submit locking, so on the flag form it runs
    /// first; locking still happens when the check cancels the submission.
    ///
    /// # Errors
    /// Returns [`HostError::Scheduling`] if the host refuses a listener.
    pub fn init(&self) -> Result<Wiring, HostError> {
        let flag_form = self.host.query(&self.config.flag_form_selector);
        if let Some(form) = &flag_form {
            self.guard_flag_form(form).context("Wiring flag form")?;
        }

        let forms = self.host.query_all(&self.config.form_selector);
        for form in &forms {
            self.lock_on_submit(form).context("Wiring submit locking")?;
        }

        self.watch_challenge_cards().context("Wiring challenge cards")?;

        let wiring = Wiring { flag_form: flag_form.is_some(), forms: forms.len() };
        debug!(flag_form = wiring.flag_form, forms = wiring.forms, "Client behaviors wired");
        Ok(wiring)
    }
}
