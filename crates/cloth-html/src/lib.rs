//! cloth HTML
//!
//! Markup content of document nodes: html5ever parsing into the cloth
//! arena and serialization back to markup (`innerHTML` / `outerHTML`).

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::{HtmlSerializer, get_inner_html, get_outer_html};

use cloth_dom::{Document, DomError, DomTree, NodeId};

/// Result type for markup operations
pub type HtmlResult<T> = Result<T, HtmlError>;

/// Markup errors
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read markup: {0}")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Parse a full HTML document
pub fn parse(html: &str) -> HtmlResult<Document> {
    HtmlParser::new().parse(html)
}

/// Replace the children of `node` with the nodes parsed from `html`
pub fn set_inner_html(tree: &mut DomTree, node: NodeId, html: &str) -> HtmlResult<()> {
    HtmlParser::new().parse_fragment_into(tree, node, html).map(|_| ())
}
