mod fixtures;

use ctf_behaviors::Behaviors;
use ctf_kernel::domain::UiConfig;
use ctf_kernel::memory::{ElementSpec, MemoryHost};
use ctf_kernel::prelude::*;
use fixtures::{ChallengePage, FLASH_WINDOW};
use std::time::Duration;

#[test]
fn flash_is_first_child_of_main_with_severity_class() {
    let page = ChallengePage::new();
    page.ui.show_flash_message("hello", Severity::Error);

    let children = page.host.children(page.main);
    let flash = children[0];
    assert_eq!(page.flashes(), vec![flash]);
    assert_eq!(page.host.class_name(flash), "flash flash-error");
    assert_eq!(page.host.text(flash), "hello");
    assert_eq!(children[1], page.card);
}

#[test]
fn flash_is_removed_after_exactly_five_seconds() {
    let page = ChallengePage::new();
    page.ui.show_flash_message("hello", "error");
    let flash = page.flashes()[0];

    page.host.advance(FLASH_WINDOW - Duration::from_millis(1));
    assert!(page.host.is_attached(flash), "flash must survive until the window closes");

    page.host.advance(Duration::from_millis(1));
    assert!(!page.host.is_attached(flash));
    assert!(page.flashes().is_empty());
    assert_eq!(page.host.pending_timers(), 0);
}

#[test]
fn messages_stack_newest_first_and_expire_independently() {
    let page = ChallengePage::new();

    page.ui.show_flash_message("first", Severity::Info);
    page.host.advance(Duration::from_millis(2000));
    page.ui.show_flash_message("second", Severity::Success);

    let flashes = page.flashes();
    assert_eq!(flashes.len(), 2);
    assert_eq!(page.host.text(flashes[0]), "second");
    assert_eq!(page.host.text(flashes[1]), "first");

    page.host.advance(Duration::from_millis(3000));
    let left = page.flashes();
    assert_eq!(left.len(), 1);
    assert_eq!(page.host.text(left[0]), "second");

    page.host.advance(Duration::from_millis(2000));
    assert!(page.flashes().is_empty());
}

#[test]
fn unknown_severity_is_accepted() {
    let page = ChallengePage::new();
    page.ui.show_flash_message("odd", "sparkly");

    let flash = page.flashes()[0];
    assert_eq!(page.host.class_name(flash), "flash flash-sparkly");
}

#[test]
fn body_is_used_without_a_main_container() {
    let host = MemoryHost::new();
    let existing = host.append(host.root(), ElementSpec::new("nav"));
    let ui = Behaviors::new(host.clone(), UiConfig::default());

    ui.show_flash_message("no main here", Severity::Warning);

    let children = host.children(host.root());
    assert_eq!(children.len(), 2);
    assert_eq!(host.class_name(children[0]), "flash flash-warning");
    assert_eq!(children[1], existing);
}

#[test]
fn configured_container_and_window_are_honored() {
    let host = MemoryHost::new();
    host.append(host.root(), ElementSpec::new("main"));
    let content = host.append(host.root(), ElementSpec::new("section").id("content"));

    let mut config = UiConfig::default();
    config.container_selector = Selector::id("content");
    config.flash_duration_ms = 250;
    let ui = Behaviors::new(host.clone(), config);

    ui.show_flash_message("quick", Severity::Info);
    let flash = host.children(content)[0];

    host.advance(Duration::from_millis(250));
    assert!(!host.is_attached(flash));
}
