//! In-memory host.
//!
//! A tiny document tree, a virtual clock, scripted dialogs and a switchable clipboard.
//! Behaviors run against it exactly as they run in the browser, which is how the
//! workspace tests them.

use crate::error::HostError;
use crate::host::{
    ClickEvent, ClickHandler, Clipboard, Dialogs, Document, Events, LocalBoxFuture, SubmitEvent,
    SubmitHandler, TimerCallback, Timers,
};
use ctf_domain::Selector;
use fxhash::FxHashMap;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

/// Handle to an element owned by a [`MemoryHost`].
///
/// Only meaningful for the host that created it; passing it to another host panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Declarative description of an element to append.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: FxHashMap<String, String>,
    text: String,
    value: Option<String>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into().to_ascii_lowercase(), ..Self::default() }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Gives the element a form-control value (`input`, `textarea`, ...).
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug)]
struct Element {
    spec: ElementSpec,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Tag(tag) => self.spec.tag == *tag,
            Selector::Class(class) => self.spec.classes.iter().any(|c| c == class),
            Selector::Id(id) => self.spec.id.as_deref() == Some(id.as_str()),
            Selector::Attribute { tag, name, value } => {
                self.spec.tag == *tag
                    && self.spec.attributes.get(name).is_some_and(|v| v == value)
            },
        }
    }
}

struct Timer {
    due: Duration,
    seq: u64,
    callback: TimerCallback,
}

/// Result of a dispatched submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub default_prevented: bool,
}

impl SubmitOutcome {
    /// Whether the browser would go on to send the form.
    pub const fn submitted(&self) -> bool {
        !self.default_prevented
    }
}

struct State {
    nodes: Vec<Element>,
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
    submit_listeners: FxHashMap<NodeId, Vec<Rc<RefCell<SubmitHandler>>>>,
    click_listeners: Vec<Rc<RefCell<ClickHandler<NodeId>>>>,
    confirm_answers: VecDeque<bool>,
    confirm_prompts: Vec<String>,
    clipboard_denial: Option<String>,
    clipboard: Option<String>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("nodes", &self.nodes.len())
            .field("now", &self.now)
            .field("pending_timers", &self.timers.len())
            .field("submit_targets", &self.submit_listeners.len())
            .field("click_listeners", &self.click_listeners.len())
            .field("clipboard", &self.clipboard)
            .finish_non_exhaustive()
    }
}

const ROOT: NodeId = NodeId(0);

/// Shared handle to an in-memory page. Clones see the same page.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    state: Rc<RefCell<State>>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// An empty page consisting of a `<body>`.
    pub fn new() -> Self {
        let body = Element {
            spec: ElementSpec::new("body"),
            disabled: false,
            parent: None,
            children: Vec::new(),
        };
        let state = State {
            nodes: vec![body],
            now: Duration::ZERO,
            next_seq: 0,
            timers: Vec::new(),
            submit_listeners: FxHashMap::default(),
            click_listeners: Vec::new(),
            confirm_answers: VecDeque::new(),
            confirm_prompts: Vec::new(),
            clipboard_denial: None,
            clipboard: None,
        };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    /// The `<body>` element.
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// Appends a new element as the last child of `parent`.
    pub fn append(&self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let mut state = self.state.borrow_mut();
        let id = NodeId(state.nodes.len());
        state.nodes.push(Element { spec, disabled: false, parent: Some(parent), children: Vec::new() });
        state.nodes[parent.0].children.push(id);
        id
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.state.borrow().nodes[node.0].children.clone()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.state.borrow().nodes[node.0].spec.text.clone()
    }

    pub fn class_name(&self, node: NodeId) -> String {
        self.state.borrow().nodes[node.0].spec.classes.join(" ")
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.state.borrow().nodes[node.0].disabled
    }

    /// Whether `node` is reachable from `<body>`.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let state = self.state.borrow();
        let mut current = node;
        loop {
            if current == ROOT {
                return true;
            }
            match state.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn set_value(&self, node: NodeId, value: impl Into<String>) {
        self.state.borrow_mut().nodes[node.0].spec.value = Some(value.into());
    }

    /// Virtual time elapsed since the page was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves the virtual clock forward, firing due timers in deadline order.
    ///
    /// Timers armed by a firing callback run in the same call if they fall due in the window.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(idx, _)| idx);
                due.map(|idx| {
                    let timer = state.timers.swap_remove(idx);
                    state.now = timer.due;
                    timer
                })
            };

            let Some(timer) = next else { break };
            trace!(due = ?timer.due, "Firing timer");
            (timer.callback)();
        }

        self.state.borrow_mut().now = target;
    }

    /// Dispatches a submit event on `form`.
    pub fn submit(&self, form: NodeId) -> SubmitOutcome {
        let listeners =
            self.state.borrow().submit_listeners.get(&form).cloned().unwrap_or_default();

        let mut event = SubmitEvent::default();
        for listener in listeners {
            (&mut *listener.borrow_mut())(&mut event);
        }

        SubmitOutcome { default_prevented: event.is_default_prevented() }
    }

    /// Dispatches a click on `target`; page-wide listeners see it after bubbling.
    pub fn click(&self, target: NodeId) {
        let listeners = self.state.borrow().click_listeners.clone();
        let event = ClickEvent { target };
        for listener in listeners {
            (&mut *listener.borrow_mut())(&event);
        }
    }

    /// Queues the answer for the next confirmation prompt. Unscripted prompts answer `false`.
    pub fn answer_confirm(&self, answer: bool) {
        self.state.borrow_mut().confirm_answers.push_back(answer);
    }

    /// Every confirmation message shown so far.
    pub fn confirm_prompts(&self) -> Vec<String> {
        self.state.borrow().confirm_prompts.clone()
    }

    /// Makes subsequent clipboard writes fail with `reason`.
    pub fn deny_clipboard(&self, reason: impl Into<String>) {
        self.state.borrow_mut().clipboard_denial = Some(reason.into());
    }

    /// Last text written to the clipboard.
    pub fn clipboard(&self) -> Option<String> {
        self.state.borrow().clipboard.clone()
    }

    fn descendants(state: &State, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = state.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(state.nodes[node.0].children.iter().rev());
        }
        out
    }

    fn find(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let state = self.state.borrow();
        Self::descendants(&state, scope)
            .into_iter()
            .filter(|node| state.nodes[node.0].matches(selector))
            .collect()
    }

    fn detach(state: &mut State, node: NodeId) {
        if let Some(parent) = state.nodes[node.0].parent.take() {
            state.nodes[parent.0].children.retain(|child| *child != node);
        }
    }
}

impl Document for MemoryHost {
    type Node = NodeId;

    fn query(&self, selector: &Selector) -> Option<NodeId> {
        self.query_in(&ROOT, selector)
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.find(ROOT, selector)
    }

    fn query_in(&self, scope: &NodeId, selector: &Selector) -> Option<NodeId> {
        self.find(*scope, selector).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&Selector::id(id))
    }

    fn body(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, HostError> {
        if tag.is_empty() {
            return Err(HostError::Dom {
                message: "empty tag name".into(),
                context: Some("create_element".into()),
            });
        }
        let mut state = self.state.borrow_mut();
        let id = NodeId(state.nodes.len());
        state.nodes.push(Element {
            spec: ElementSpec::new(tag),
            disabled: false,
            parent: None,
            children: Vec::new(),
        });
        Ok(id)
    }

    fn set_class_name(&self, node: &NodeId, class_name: &str) {
        self.state.borrow_mut().nodes[node.0].spec.classes =
            class_name.split_whitespace().map(str::to_owned).collect();
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.state.borrow().nodes[node.0].spec.classes.iter().any(|c| c == class)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut state = self.state.borrow_mut();
        for child in std::mem::take(&mut state.nodes[node.0].children) {
            state.nodes[child.0].parent = None;
        }
        text.clone_into(&mut state.nodes[node.0].spec.text);
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        self.state.borrow().nodes[node.0].spec.value.clone()
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.state.borrow_mut().nodes[node.0].disabled = disabled;
    }

    fn prepend(&self, parent: &NodeId, child: &NodeId) -> Result<(), HostError> {
        if parent == child {
            return Err(HostError::Dom {
                message: "an element cannot contain itself".into(),
                context: Some("prepend".into()),
            });
        }
        let mut state = self.state.borrow_mut();
        Self::detach(&mut state, *child);
        state.nodes[child.0].parent = Some(*parent);
        state.nodes[parent.0].children.insert(0, *child);
        Ok(())
    }

    fn remove(&self, node: &NodeId) {
        Self::detach(&mut self.state.borrow_mut(), *node);
    }
}

impl Events for MemoryHost {
    fn on_submit(&self, form: &NodeId, handler: SubmitHandler) -> Result<(), HostError> {
        self.state
            .borrow_mut()
            .submit_listeners
            .entry(*form)
            .or_default()
            .push(Rc::new(RefCell::new(handler)));
        Ok(())
    }

    fn on_click(&self, handler: ClickHandler<NodeId>) -> Result<(), HostError> {
        self.state.borrow_mut().click_listeners.push(Rc::new(RefCell::new(handler)));
        Ok(())
    }
}

impl Timers for MemoryHost {
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.timers.push(Timer { due, seq, callback });
        Ok(())
    }
}

impl Dialogs for MemoryHost {
    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.confirm_prompts.push(message.to_owned());
        state.confirm_answers.pop_front().unwrap_or(false)
    }
}

impl Clipboard for MemoryHost {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), HostError>> {
        let state = &mut *self.state.borrow_mut();
        let result = match &state.clipboard_denial {
            Some(reason) => Err(HostError::Clipboard {
                message: reason.clone().into(),
                context: Some("writeText".into()),
            }),
            None => {
                state.clipboard = Some(text.to_owned());
                Ok(())
            },
        };
        Box::pin(std::future::ready(result))
    }
}
