//! DOM Binding
//!
//! The few document operations the stat widget performs, behind a trait so
//! the widget runs against a browser binding or the in-memory document.

pub mod memory;
pub mod selector;

pub use memory::{Element, MemoryDocument, NodeId};
pub use selector::{Selector, SelectorError};

pub const PAGE_KEY_ATTR: &str = "data-page-key";

/// A queryable, writable document
pub trait Document {
    type Node: Copy;

    /// All nodes matching `selector`, in document order
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Node>;

    fn query_selector(&self, selector: &str) -> Option<Self::Node> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_text_content(&mut self, node: Self::Node, text: &str);
}
