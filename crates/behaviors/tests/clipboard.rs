mod fixtures;

use fixtures::{ChallengePage, FLASH_WINDOW};

#[tokio::test]
async fn successful_copy_shows_success_flash() {
    let page = ChallengePage::wired();

    page.ui.copy_to_clipboard("foo").await;

    assert_eq!(page.host.clipboard().as_deref(), Some("foo"));
    let flashes = page.flashes();
    assert_eq!(flashes.len(), 1);
    assert_eq!(page.host.class_name(flashes[0]), "flash flash-success");
    assert_eq!(page.host.text(flashes[0]), "Link copied to clipboard!");

    page.host.advance(FLASH_WINDOW);
    assert!(page.flashes().is_empty());
}

#[tokio::test]
async fn failed_copy_is_silent() {
    let page = ChallengePage::wired();
    page.host.deny_clipboard("NotAllowedError: Write permission denied.");

    page.ui.copy_to_clipboard("foo").await;

    assert!(page.host.clipboard().is_none());
    assert!(page.flashes().is_empty());
    assert_eq!(page.host.pending_timers(), 0);
}
