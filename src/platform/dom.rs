//! Document and element handles.
//!
//! Element operations are infallible from the caller's point of view: an
//! implementation that hits a platform error logs it and carries on, which
//! keeps every helper a silent no-op on a broken page.

use crate::error::UiError;

/// A handle to one element on the page.
pub trait Element: Clone + 'static {
    /// Toggle `class`, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    /// Set the value of a form control. Other elements ignore it.
    fn set_value(&self, value: &str);
    /// Inline `style.display`, empty when unset.
    fn inline_display(&self) -> String;
    fn set_inline_display(&self, value: &str);
    fn set_style_property(&self, name: &str, value: &str);
    /// Detach from the document.
    fn remove(&self);
}

/// The page the helpers operate on.
pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;
    /// Create `<tag class=class_name>` with trusted `inner_html` and append it
    /// as the last child of `<body>`.
    fn append_to_body(&self, tag: &str, class_name: &str, inner_html: &str) -> Option<Self::Element>;
    /// Copy through a temporary offscreen textarea and `execCommand("copy")`.
    ///
    /// # Errors
    ///
    /// Returns an error when the page has no body or the copy command is
    /// refused.
    fn legacy_copy(&self, text: &str) -> Result<(), UiError>;
}
