//! Focus Management
//!
//! Tracks the single focused element of a document.

use crate::{ElementData, NodeId};

/// Focus tracker
#[derive(Debug, Default)]
pub struct FocusTracker {
    focused: Option<NodeId>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus element, replacing any previous focus
    pub fn focus(&mut self, id: NodeId) {
        self.focused = Some(id);
    }

    /// Get focused element
    pub fn get_focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Blur `id` if it holds focus. Returns whether focus was released.
    pub fn blur(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Drop focus unconditionally
    pub fn clear(&mut self) {
        self.focused = None;
    }
}

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// No `tabindex` attribute, or one that is not an integer
    Unset,
    /// `tabindex="-1"`: focusable by script only
    ScriptOnly,
    /// `tabindex="0"` or positive
    Sequential(i32),
}

impl TabIndex {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().parse::<i32>()) {
            Some(Ok(n)) if n < 0 => Self::ScriptOnly,
            Some(Ok(n)) => Self::Sequential(n),
            _ => Self::Unset,
        }
    }
}

/// Whether `element.focus()` would move focus to this element
pub fn is_focusable(element: &ElementData) -> bool {
    if TabIndex::parse(element.get_attr("tabindex")) != TabIndex::Unset {
        return true;
    }
    match element.tag.as_str() {
        "a" | "area" => element.attrs.has_attribute("href"),
        "input" => {
            !element.attrs.has_attribute("disabled")
                && !element
                    .get_attr("type")
                    .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
        }
        "button" | "select" | "textarea" => !element.attrs.has_attribute("disabled"),
        _ => false,
    }
}
