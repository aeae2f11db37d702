//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the cloth arena.

use crate::{HtmlError, HtmlResult};
use cloth_dom::{Document, DomError, DomTree, NodeId};
use html5ever::{LocalName, QualName, ns, parse_document, parse_fragment};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string into a Document
    pub fn parse(&self, html: &str) -> HtmlResult<Document> {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = self.parse_rcdom(html)?;
        let mut document = Document::empty();
        self.convert_node(&dom.document, document.tree_mut(), NodeId::ROOT, true)?;

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Replace the children of `parent` with the nodes parsed from `html`.
    ///
    /// The markup is parsed as a fragment in the context of `parent`'s tag,
    /// the way an `innerHTML` write is, so whitespace is kept and rows written
    /// into a `<table>` stay rows. On error, `parent` keeps its children.
    ///
    /// Returns the number of top-level nodes inserted.
    pub fn parse_fragment_into(
        &self,
        tree: &mut DomTree,
        parent: NodeId,
        html: &str,
    ) -> HtmlResult<usize> {
        let context = tree
            .get(parent)
            .and_then(|n| n.as_element())
            .map(|e| e.tag.clone())
            .ok_or(DomError::NotAnElement)?;
        let dom = self.parse_fragment_rcdom(&context, html)?;

        tree.remove_children(parent)?;
        let mut inserted = 0;
        // The fragment parser roots its output in a synthetic <html> element
        for root in dom.document.children.borrow().iter() {
            for child in root.children.borrow().iter() {
                self.convert_node(child, tree, parent, false)?;
                inserted += 1;
            }
        }

        tracing::debug!(
            "Parsed fragment into <{}> {:?}: {} top-level nodes",
            context,
            parent,
            inserted
        );
        Ok(inserted)
    }

    fn parse_rcdom(&self, html: &str) -> HtmlResult<RcDom> {
        parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(HtmlError::Read)
    }

    fn parse_fragment_rcdom(&self, context: &str, html: &str) -> HtmlResult<RcDom> {
        let context = QualName::new(None, ns!(html), LocalName::from(context));
        parse_fragment(RcDom::default(), Default::default(), context, Vec::new(), false)
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(HtmlError::Read)
    }

    /// Convert an RcDom node (and its subtree) into the arena under `parent`
    fn convert_node(
        &self,
        handle: &Handle,
        tree: &mut DomTree,
        parent: NodeId,
        drop_blank_text: bool,
    ) -> HtmlResult<()> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent, drop_blank_text)?;
                }
            }
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => {
                let id = tree.create_doctype(name, public_id, system_id);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if drop_blank_text && text.trim().is_empty() {
                    return Ok(());
                }
                let id = tree.create_text(&text);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                let element = tree
                    .get_mut(id)
                    .and_then(|n| n.as_element_mut())
                    .ok_or(DomError::NotAnElement)?;
                for attr in attrs.borrow().iter() {
                    if let Err(err) = element.set_attr(&attr.name.local, &attr.value) {
                        tracing::debug!("Skipping attribute on <{}>: {}", element.tag, err);
                    }
                }
                tree.append_child(parent, id)?;

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id, drop_blank_text)?;
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {
                // Not produced by the HTML tokenizer
            }
        }
        Ok(())
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p id=\"x\">Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        let p = doc.get_element_by_id("x").unwrap();
        assert_eq!(doc.tree().text_content(p), "Hello");
        assert!(doc.body().is_some());
    }

    #[test]
    fn test_fragment_replaces_children() {
        let mut doc = cloth_dom::Document::new();
        let body = doc.body().unwrap();
        let div = doc.create_element("div");
        let old = doc.tree_mut().create_text("old");
        doc.tree_mut().append_child(body, div).unwrap();
        doc.tree_mut().append_child(div, old).unwrap();

        let inserted = HtmlParser::new()
            .parse_fragment_into(doc.tree_mut(), div, "<b>bold</b> tail")
            .unwrap();

        assert_eq!(inserted, 2);
        let tags: Vec<Option<&str>> = doc
            .tree()
            .children(div)
            .map(|(id, _)| doc.tree().tag_name(id))
            .collect();
        assert_eq!(tags, vec![Some("b"), None]);
        assert_eq!(doc.tree().text_content(div), "bold tail");
    }

    #[test]
    fn test_fragment_uses_parent_as_context() {
        let mut doc = cloth_dom::Document::new();
        let body = doc.body().unwrap();
        let table = doc.create_element("table");
        doc.tree_mut().append_child(body, table).unwrap();

        HtmlParser::new()
            .parse_fragment_into(doc.tree_mut(), table, "<tr><td>a</td></tr>")
            .unwrap();

        let tbody = doc.tree().children(table).next().map(|(id, _)| id).unwrap();
        assert_eq!(doc.tree().tag_name(tbody), Some("tbody"));
        let row = doc.tree().children(tbody).next().map(|(id, _)| id).unwrap();
        assert_eq!(doc.tree().tag_name(row), Some("tr"));
    }

    #[test]
    fn test_fragment_keeps_whitespace() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");

        HtmlParser::new().parse_fragment_into(&mut tree, div, "   ").unwrap();
        assert_eq!(tree.text_content(div), "   ");

        HtmlParser::new().parse_fragment_into(&mut tree, div, "  hi <b>x</b>").unwrap();
        assert_eq!(tree.text_content(div), "  hi x");
    }

    #[test]
    fn test_fragment_into_text_node_rejected() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        let err = HtmlParser::new().parse_fragment_into(&mut tree, text, "<b></b>");
        assert!(matches!(err, Err(HtmlError::Dom(DomError::NotAnElement))));
    }
}
