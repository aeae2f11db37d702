//! Per-call options
//!
//! Each converts from the boolean flag the call would otherwise take, with
//! `false` meaning the default.

/// Where `append` places the new element among its siblings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// After the last child
    #[default]
    Append,
    /// Before the first child
    Prepend,
}

/// Which content `retrieve` and `adjust` address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Content {
    /// The scalar value (`element.value`)
    #[default]
    Value,
    /// The markup content (`element.innerHTML`)
    Markup,
}

/// What `focus` does with the element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusAction {
    #[default]
    Focus,
    Blur,
}

impl From<bool> for Placement {
    fn from(prepend: bool) -> Self {
        if prepend { Self::Prepend } else { Self::Append }
    }
}

impl From<bool> for Content {
    fn from(inner_html: bool) -> Self {
        if inner_html { Self::Markup } else { Self::Value }
    }
}

impl From<bool> for FocusAction {
    fn from(defocus: bool) -> Self {
        if defocus { Self::Blur } else { Self::Focus }
    }
}
