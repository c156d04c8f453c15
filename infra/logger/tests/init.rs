use ctf_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;

fn ensure_installed() {
    match Logger::builder().name("integration").level(LevelFilter::TRACE).init() {
        Ok(logger) => assert_eq!(logger.name(), "integration"),
        Err(LoggerError::Subscriber { .. }) => {},
        Err(err) => panic!("unexpected logger error: {err}"),
    }
}

#[test]
#[serial]
fn second_init_returns_subscriber_error() {
    ensure_installed();

    let err = Logger::builder()
        .name("integration-second")
        .init()
        .expect_err("second init should fail");

    assert!(
        matches!(err, LoggerError::Subscriber { context: Some(_), .. }),
        "expected subscriber error for second init"
    );
}

#[test]
#[serial]
fn events_at_every_level_are_accepted() {
    ensure_installed();

    tracing::error!(code = 1, "error line");
    tracing::warn!("warn line");
    tracing::info!(flag_form = true, forms = 3, "info line");
    tracing::debug!("debug line");
    tracing::trace!("trace line");
}
