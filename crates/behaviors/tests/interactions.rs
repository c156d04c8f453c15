mod fixtures;

use fixtures::ChallengePage;

#[test]
fn confirm_delete_uses_default_prompt() {
    let page = ChallengePage::new();
    page.host.answer_confirm(true);

    assert!(page.ui.confirm_delete(None));
    assert_eq!(
        page.host.confirm_prompts(),
        vec!["Are you sure you want to delete this item?".to_owned()]
    );
}

#[test]
fn confirm_delete_passes_custom_prompt_and_answer_through() {
    let page = ChallengePage::new();
    page.host.answer_confirm(false);

    assert!(!page.ui.confirm_delete(Some("Delete challenge 'XSS 2'?")));
    assert_eq!(page.host.confirm_prompts(), vec!["Delete challenge 'XSS 2'?".to_owned()]);
}

#[test]
fn challenge_card_click_is_inert() {
    let page = ChallengePage::wired();
    let before = page.host.children(page.main);

    page.host.click(page.card);
    page.host.click(page.flag_button);

    assert_eq!(page.host.children(page.main), before);
    assert_eq!(page.host.text(page.card), "SQLi 101");
    assert!(page.flashes().is_empty());
    assert_eq!(page.host.pending_timers(), 0);
    assert!(page.host.confirm_prompts().is_empty());
}
