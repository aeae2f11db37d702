//! Document host boundary
//!
//! The operations the façade needs from a document, and their
//! implementation for the in-memory [`Document`].

use crate::{FallbackRoot, HostResult};
use cloth_dom::{Document, NodeId};
use std::fmt;

/// A document the façade can drive
pub trait DocumentHost {
    /// Reference to a node, valid for the lifetime of the document
    type Handle: Copy + Eq + fmt::Debug;

    /// Find an element by its `id` attribute
    fn element_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// Create a detached element
    fn create_element(&mut self, element_type: &str) -> Self::Handle;

    /// Set one attribute
    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str) -> HostResult<()>;

    /// The container orphaned appends go to, if the document has one yet
    fn root_container(&self, root: FallbackRoot) -> Option<Self::Handle>;

    /// Insert `child` as the last child of `parent`
    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle) -> HostResult<()>;

    /// Insert `child` before the first child of `parent`
    fn prepend_child(&mut self, parent: Self::Handle, child: Self::Handle) -> HostResult<()>;

    /// Detach an element from its parent
    fn remove(&mut self, element: Self::Handle) -> HostResult<()>;

    /// Scalar value, if the element has one
    fn value(&self, element: Self::Handle) -> Option<String>;

    /// Overwrite the scalar value
    fn set_value(&mut self, element: Self::Handle, value: &str) -> HostResult<()>;

    /// Serialized child content
    fn inner_html(&self, element: Self::Handle) -> String;

    /// Replace the child content with parsed markup
    fn set_inner_html(&mut self, element: Self::Handle, markup: &str) -> HostResult<()>;

    /// Request focus. Returns whether the element took it.
    fn focus(&mut self, element: Self::Handle) -> HostResult<bool>;

    /// Relinquish focus. Returns whether the element held it.
    fn blur(&mut self, element: Self::Handle) -> bool;

    /// Inline style declarations in order
    fn inline_style(&self, element: Self::Handle) -> HostResult<Vec<(String, String)>>;
}

impl<H: DocumentHost + ?Sized> DocumentHost for &mut H {
    type Handle = H::Handle;

    fn element_by_id(&self, id: &str) -> Option<Self::Handle> {
        (**self).element_by_id(id)
    }

    fn create_element(&mut self, element_type: &str) -> Self::Handle {
        (**self).create_element(element_type)
    }

    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str) -> HostResult<()> {
        (**self).set_attribute(element, name, value)
    }

    fn root_container(&self, root: FallbackRoot) -> Option<Self::Handle> {
        (**self).root_container(root)
    }

    fn append_child(&mut self, parent: Self::Handle, child: Self::Handle) -> HostResult<()> {
        (**self).append_child(parent, child)
    }

    fn prepend_child(&mut self, parent: Self::Handle, child: Self::Handle) -> HostResult<()> {
        (**self).prepend_child(parent, child)
    }

    fn remove(&mut self, element: Self::Handle) -> HostResult<()> {
        (**self).remove(element)
    }

    fn value(&self, element: Self::Handle) -> Option<String> {
        (**self).value(element)
    }

    fn set_value(&mut self, element: Self::Handle, value: &str) -> HostResult<()> {
        (**self).set_value(element, value)
    }

    fn inner_html(&self, element: Self::Handle) -> String {
        (**self).inner_html(element)
    }

    fn set_inner_html(&mut self, element: Self::Handle, markup: &str) -> HostResult<()> {
        (**self).set_inner_html(element, markup)
    }

    fn focus(&mut self, element: Self::Handle) -> HostResult<bool> {
        (**self).focus(element)
    }

    fn blur(&mut self, element: Self::Handle) -> bool {
        (**self).blur(element)
    }

    fn inline_style(&self, element: Self::Handle) -> HostResult<Vec<(String, String)>> {
        (**self).inline_style(element)
    }
}

impl DocumentHost for Document {
    type Handle = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.get_element_by_id(id)
    }

    fn create_element(&mut self, element_type: &str) -> NodeId {
        Document::create_element(self, element_type)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> HostResult<()> {
        Ok(Document::set_attribute(self, element, name, value)?)
    }

    fn root_container(&self, root: FallbackRoot) -> Option<NodeId> {
        match root {
            FallbackRoot::Body => self.body(),
            FallbackRoot::DocumentElement => self.document_element(),
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> HostResult<()> {
        Ok(self.tree_mut().append_child(parent, child)?)
    }

    fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> HostResult<()> {
        Ok(self.tree_mut().prepend_child(parent, child)?)
    }

    fn remove(&mut self, element: NodeId) -> HostResult<()> {
        Ok(self.detach(element)?)
    }

    fn value(&self, element: NodeId) -> Option<String> {
        self.tree().value(element)
    }

    fn set_value(&mut self, element: NodeId, value: &str) -> HostResult<()> {
        Ok(self.tree_mut().set_value(element, value)?)
    }

    fn inner_html(&self, element: NodeId) -> String {
        cloth_html::get_inner_html(self.tree(), element)
    }

    fn set_inner_html(&mut self, element: NodeId, markup: &str) -> HostResult<()> {
        Ok(cloth_html::set_inner_html(self.tree_mut(), element, markup)?)
    }

    fn focus(&mut self, element: NodeId) -> HostResult<bool> {
        Ok(Document::focus(self, element)?)
    }

    fn blur(&mut self, element: NodeId) -> bool {
        Document::blur(self, element)
    }

    fn inline_style(&self, element: NodeId) -> HostResult<Vec<(String, String)>> {
        let style = Document::inline_style(self, element)?;
        Ok(style
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}
