//! In-memory document used by native builds and tests.
//!
//! Elements are shared `Rc<RefCell<_>>` nodes so handles cloned into timer
//! callbacks observe the same state as the test holding the document.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::dom::{Document, Element};
use crate::error::UiError;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    value: String,
    inner_html: String,
    style: BTreeMap<String, String>,
    attached: bool,
}

/// Handle to a node in a [`MemoryDocument`].
#[derive(Clone, Debug)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_owned(),
            attached: true,
            ..Node::default()
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Space-joined class list, as `className` would read.
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn style_property(&self, name: &str) -> Option<String> {
        self.0.borrow().style.get(name).cloned()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().attached
    }
}

impl Element for MemoryElement {
    fn toggle_class(&self, class: &str) -> bool {
        let mut node = self.0.borrow_mut();
        if let Some(pos) = node.classes.iter().position(|c| c == class) {
            node.classes.remove(pos);
            false
        } else {
            node.classes.push(class.to_owned());
            true
        }
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn set_value(&self, value: &str) {
        let mut node = self.0.borrow_mut();
        if matches!(node.tag.as_str(), "input" | "textarea") {
            node.value = value.to_owned();
        }
    }

    fn inline_display(&self) -> String {
        self.style_property("display").unwrap_or_default()
    }

    fn set_inline_display(&self, value: &str) {
        self.set_style_property("display", value);
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.0.borrow_mut().style.insert(name.to_owned(), value.to_owned());
    }

    fn remove(&self) {
        self.0.borrow_mut().attached = false;
    }
}

#[derive(Debug, Default)]
struct Page {
    by_id: HashMap<String, MemoryElement>,
    /// Detached children are pruned on the next append.
    body_children: Vec<MemoryElement>,
    copied: Vec<String>,
}

/// A page with a `<html>` root, a `<body>`, and whatever elements a test
/// registers by id.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    root: MemoryElement,
    body: Option<MemoryElement>,
    page: Rc<RefCell<Page>>,
    copy_command_enabled: Rc<Cell<bool>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            root: MemoryElement::new("html"),
            body: Some(MemoryElement::new("body")),
            page: Rc::new(RefCell::new(Page::default())),
            copy_command_enabled: Rc::new(Cell::new(true)),
        }
    }

    /// A document whose `<body>` has not been parsed yet.
    pub fn without_body() -> Self {
        Self {
            body: None,
            ..Self::new()
        }
    }

    /// Register an element under `id`.
    pub fn insert(&self, id: &str, tag: &str) -> MemoryElement {
        let el = MemoryElement::new(tag);
        self.page.borrow_mut().by_id.insert(id.to_owned(), el.clone());
        el
    }

    /// Body children still attached, in insertion order.
    pub fn body_children(&self) -> Vec<MemoryElement> {
        self.page
            .borrow()
            .body_children
            .iter()
            .filter(|el| el.is_attached())
            .cloned()
            .collect()
    }

    /// Whether `execCommand("copy")` reports success.
    pub fn set_copy_command_enabled(&self, enabled: bool) {
        self.copy_command_enabled.set(enabled);
    }

    /// Texts that went through the textarea fallback.
    pub fn legacy_copies(&self) -> Vec<String> {
        self.page.borrow().copied.clone()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.page
            .borrow()
            .by_id
            .get(id)
            .filter(|el| el.is_attached())
            .cloned()
    }

    fn body(&self) -> Option<MemoryElement> {
        self.body.clone()
    }

    fn root(&self) -> Option<MemoryElement> {
        Some(self.root.clone())
    }

    fn append_to_body(&self, tag: &str, class_name: &str, inner_html: &str) -> Option<MemoryElement> {
        self.body.as_ref()?;
        let el = MemoryElement::new(tag);
        {
            let mut node = el.0.borrow_mut();
            node.classes = class_name.split_whitespace().map(str::to_owned).collect();
            node.inner_html = inner_html.to_owned();
        }
        let mut page = self.page.borrow_mut();
        page.body_children.retain(MemoryElement::is_attached);
        page.body_children.push(el.clone());
        Some(el)
    }

    fn legacy_copy(&self, text: &str) -> Result<(), UiError> {
        if self.body.is_none() {
            return Err(UiError::MissingElement("body".to_owned()));
        }
        if !self.copy_command_enabled.get() {
            return Err(UiError::CopyCommandRejected);
        }
        self.page.borrow_mut().copied.push(text.to_owned());
        Ok(())
    }
}
