#![allow(dead_code)]

use ctf_behaviors::Behaviors;
use ctf_kernel::domain::UiConfig;
use ctf_kernel::memory::{ElementSpec, MemoryHost, NodeId};
use ctf_kernel::prelude::*;
use std::time::Duration;

pub const FLASH_WINDOW: Duration = Duration::from_millis(5000);
pub const FLAG_FORMAT_MESSAGE: &str = "Flag must be in the format: AITCTF{flag_here}";

/// A challenge page: `<main>` with a flag form, a comment form, a challenge card and a
/// form without a submit button.
pub struct ChallengePage {
    pub host: MemoryHost,
    pub ui: Behaviors<MemoryHost>,
    pub main: NodeId,
    pub flag_form: NodeId,
    pub flag_input: NodeId,
    pub flag_button: NodeId,
    pub comment_form: NodeId,
    pub comment_button: NodeId,
    pub bare_form: NodeId,
    pub card: NodeId,
}

impl ChallengePage {
    pub fn new() -> Self {
        let host = MemoryHost::new();
        let main = host.append(host.root(), ElementSpec::new("main"));

        let card = host.append(main, ElementSpec::new("div").class("challenge-card").text("SQLi 101"));

        let flag_form = host.append(main, ElementSpec::new("form").class("flag-form"));
        let flag_input = host.append(flag_form, ElementSpec::new("input").id("flag").value(""));
        let flag_button = host.append(
            flag_form,
            ElementSpec::new("button").attr("type", "submit").text("Submit Flag"),
        );

        let comment_form = host.append(main, ElementSpec::new("form"));
        host.append(comment_form, ElementSpec::new("textarea").value("nice one"));
        let comment_button = host.append(
            comment_form,
            ElementSpec::new("button").attr("type", "submit").text("Post"),
        );

        let bare_form = host.append(main, ElementSpec::new("form"));
        host.append(bare_form, ElementSpec::new("button").attr("type", "button").text("Cancel"));

        let ui = Behaviors::new(host.clone(), UiConfig::default());

        Self {
            host,
            ui,
            main,
            flag_form,
            flag_input,
            flag_button,
            comment_form,
            comment_button,
            bare_form,
            card,
        }
    }

    pub fn wired() -> Self {
        let page = Self::new();
        page.ui.init().expect("wiring should succeed on the memory host");
        page
    }

    pub fn flashes(&self) -> Vec<NodeId> {
        self.host.query_all(&Selector::class("flash"))
    }

    pub fn flashes_with(&self, class: &str) -> Vec<NodeId> {
        self.host.query_all(&Selector::class(class))
    }
}
