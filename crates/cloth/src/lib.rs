//! cloth
//!
//! A small façade for building and editing a document by element id:
//! append, remove, retrieve, adjust, focus and scale.
//!
//! Every call looks its element up again, so nothing goes stale when the
//! document changes underneath. Lookups that miss are not errors: mutators
//! report [`Lookup::NotFound`], `retrieve` returns `None`, and an append
//! whose parent is missing falls back to the document body.
//!
//! # Example
//! ```rust,ignore
//! use cloth::{Cloth, Content, Document, Placement};
//!
//! let mut cloth = Cloth::new(Document::new());
//! cloth.append("form", "input", [("id", "user"), ("type", "text")], Placement::Append);
//! cloth.adjust("user", "ada", Content::Value);
//! assert_eq!(cloth.retrieve("user", Content::Value).as_deref(), Some("ada"));
//! cloth.scale("user", 1.25);
//! ```

mod config;
mod error;
mod facade;
mod host;
pub mod logging;
mod options;
mod scale;

pub use config::{ClothConfig, FallbackRoot, MissingElementLog};
pub use error::{ConfigError, HostError, HostResult};
pub use facade::{AppendOutcome, Cloth, Lookup};
pub use host::DocumentHost;
pub use options::{Content, FocusAction, Placement};
pub use scale::{format_factor, scaled_style};

pub use cloth_dom::{Document, NodeId};

// Re-export sub-crates for advanced usage
pub use cloth_dom as dom;
pub use cloth_html as html;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
