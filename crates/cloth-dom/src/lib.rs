//! cloth DOM - Document tree
//!
//! Arena-backed document tree that the cloth element façade drives:
//! element creation, attributes, insertion and removal, scalar values,
//! inline style declarations and focus.

mod attributes;
mod document;
mod focus;
mod forms;
mod node;
mod style;
mod tree;

pub use attributes::{Attr, NamedNodeMap, is_valid_attribute_name};
pub use document::Document;
pub use focus::{FocusTracker, TabIndex, is_focusable};
pub use forms::FormControl;
pub use node::{ElementData, Node, NodeData, TextData};
pub use style::CssStyleDeclaration;
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Null link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this ID is not the null link
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found")]
    NotFound,

    #[error("Hierarchy request error")]
    HierarchyRequest,

    #[error("Node is not an element")]
    NotAnElement,

    #[error("Reference node is not a child of the parent")]
    NotAChild,

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),
}
