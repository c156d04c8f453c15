use std::borrow::Cow;

/// Errors raised by a host while touching the page.
#[ctf_derive::ctf_error]
pub enum HostError {
    /// A DOM call was rejected (e.g., element creation or insertion failed).
    #[error("DOM error{}: {message}", format_context(.context))]
    Dom { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Registering a listener or timer failed.
    #[error("Scheduling error{}: {message}", format_context(.context))]
    Scheduling { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The clipboard write was refused or is unavailable.
    #[error("Clipboard error{}: {message}", format_context(.context))]
    Clipboard { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal logic errors.
    #[error("Internal host error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
