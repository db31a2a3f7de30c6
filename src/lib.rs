//! UI description (JSON node tree) → UI loader table-literal files.
//!
//! ```text
//! text ─parse→ Node ─normalize→ NormalizedNode ─order/format→ lines ─emit→ block
//! ```
//!
//! Everything past parsing is total: unknown kinds, missing attributes and
//! extra attributes are defaulted or passed through, never rejected.
pub mod classify;
pub mod defaults;
pub mod emit;
pub mod error;
pub mod fence;
pub mod format;
pub mod kind;
pub mod node;
pub mod normalize;
pub mod order;
pub mod path_de;
pub mod schema;

pub use error::{Error, Result};
pub use kind::NodeKind;
pub use node::{Attrs, Node};

/// Convert JSON text to the root table-literal block.
pub fn convert(json_src: &str) -> Result<String> {
    let root = Node::parse(json_src)?;
    Ok(emit::render_block(&root))
}

/// Convert JSON text to the full `.ui` file contents.
pub fn convert_document(json_src: &str) -> Result<String> {
    let root = Node::parse(json_src)?;
    Ok(emit::render_document(&root))
}
