use ctf_derive::ctf_error;
use std::borrow::Cow;

#[ctf_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn ctf_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ctf_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn parse(raw: &str) -> Result<u8, SampleError> {
        Ok(raw.parse::<u8>()?)
    }

    let err = parse("not a number").unwrap_err();
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
}

#[test]
fn context_is_attached_to_source_results() {
    let err = "x".parse::<u8>().context("Reading byte").unwrap_err();
    assert_eq!(err.to_string(), "Parse error (Reading byte): invalid digit found in string");
}

#[test]
fn context_overrides_existing_error() {
    let res: Result<(), SampleError> =
        Err(SampleError::Rejected { message: "nope".into(), context: None });
    let err = res.context("Second look").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (Second look): nope");
}

#[test]
fn strings_become_internal_errors() {
    let borrowed: SampleError = "static fault".into();
    let owned: SampleError = String::from("owned fault").into();

    assert_eq!(borrowed.to_string(), "Internal error: static fault");
    assert_eq!(owned.to_string(), "Internal error: owned fault");
}
