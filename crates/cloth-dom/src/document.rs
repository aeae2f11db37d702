//! Document - High-level document API

use crate::{
    CssStyleDeclaration, DomError, DomResult, DomTree, FocusTracker, NodeId, focus::is_focusable,
};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Focused element
    focus: FocusTracker,
}

impl Document {
    /// Create a document with the `html > (head, body)` skeleton
    pub fn new() -> Self {
        let mut document = Self::empty();
        document.ensure_body();
        document
    }

    /// Create a document with no structure, as seen before any markup loaded
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            focus: FocusTracker::new(),
        }
    }

    /// Get the `<html>` element
    pub fn document_element(&self) -> Option<NodeId> {
        self.tree
            .children(self.tree.root())
            .find(|(_, node)| node.as_element().is_some_and(|e| e.is("html")))
            .map(|(id, _)| id)
    }

    /// Get the `<head>` element
    pub fn head(&self) -> Option<NodeId> {
        self.child_of_html("head")
    }

    /// Get the `<body>` element
    pub fn body(&self) -> Option<NodeId> {
        self.child_of_html("body")
    }

    fn child_of_html(&self, tag: &str) -> Option<NodeId> {
        let html = self.document_element()?;
        self.tree
            .children(html)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.is(tag)))
            .map(|(id, _)| id)
    }

    /// Build whatever part of the `html > (head, body)` skeleton is missing
    /// and return the body.
    pub fn ensure_body(&mut self) -> NodeId {
        if let Some(body) = self.body() {
            return body;
        }
        let html = match self.document_element() {
            Some(html) => html,
            None => {
                let html = self.tree.create_element("html");
                self.attach(NodeId::ROOT, html);
                html
            }
        };
        if self.head().is_none() {
            let head = self.tree.create_element("head");
            self.attach(html, head);
        }
        let body = self.tree.create_element("body");
        self.attach(html, body);
        body
    }

    // Freshly created nodes under a live container always insert cleanly.
    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Err(err) = self.tree.append_child(parent, child) {
            tracing::error!("Failed to build document skeleton: {}", err);
        }
    }

    /// Get the first connected element whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|(_, node)| node.as_element().and_then(|e| e.id()) == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.tree
            .get_mut(element)
            .and_then(|n| n.as_element_mut())
            .ok_or(DomError::NotAnElement)?
            .set_attr(name, value)
    }

    /// Get an attribute of an element
    pub fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.tree.get(element)?.as_element()?.get_attr(name)
    }

    /// Detach a node from its parent, dropping focus held inside it
    pub fn detach(&mut self, node: NodeId) -> DomResult<()> {
        self.tree.detach(node)?;
        if let Some(focused) = self.focus.get_focused() {
            if self.tree.is_inclusive_ancestor(node, focused) {
                tracing::debug!("Focused node {:?} left the document", focused);
                self.focus.clear();
            }
        }
        Ok(())
    }

    /// Parsed inline style of an element (re-read from the `style` attribute)
    pub fn inline_style(&self, element: NodeId) -> DomResult<CssStyleDeclaration> {
        let element = self
            .tree
            .get(element)
            .and_then(|n| n.as_element())
            .ok_or(DomError::NotAnElement)?;
        Ok(element
            .get_attr("style")
            .map(CssStyleDeclaration::parse)
            .unwrap_or_default())
    }

    /// Move focus to an element. Returns whether focus moved; detached and
    /// non-focusable elements are refused.
    pub fn focus(&mut self, element: NodeId) -> DomResult<bool> {
        let data = self
            .tree
            .get(element)
            .and_then(|n| n.as_element())
            .ok_or(DomError::NotAnElement)?;
        if !is_focusable(data) || !self.tree.is_connected(element) {
            tracing::debug!("Element {:?} <{}> cannot take focus", element, data.tag);
            return Ok(false);
        }
        self.focus.focus(element);
        Ok(true)
    }

    /// Release focus if `element` holds it
    pub fn blur(&mut self, element: NodeId) -> bool {
        self.focus.blur(element)
    }

    /// The focused element, if it is still in the document
    pub fn focused(&self) -> Option<NodeId> {
        self.focus
            .get_focused()
            .filter(|&id| self.tree.is_connected(id))
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
