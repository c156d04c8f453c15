use ctf_derive::ctf_error;
use std::borrow::Cow;

#[ctf_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u16, DemoError> {
    raw.parse::<u16>().context("Parsing port")
}

fn main() {
    let _ = parse("80");
    let _: DemoError = "boom".into();
}
