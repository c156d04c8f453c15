use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[ctf_derive::ctf_error]
pub enum LoggerError {
    /// Occurs if a global tracing subscriber has already been initialized.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Invalid configuration supplied to the logger builder.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
