use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Document;
use super::selector::Selector;

/// Index of an element in a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A flat element: no children, just what selectors and counters need
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    pub text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Attribute lookup; `id` and `class` resolve to their dedicated fields
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name.to_ascii_lowercase().as_str() {
            "id" => self.id.clone(),
            "class" if !self.classes.is_empty() => Some(self.classes.join(" ")),
            "class" => None,
            other => self.attributes.get(other).cloned(),
        }
    }
}

/// Document held entirely in memory, elements kept in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(default)]
    elements: Vec<Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse DOM document")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read DOM file {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("In {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize DOM document")
    }

    pub fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Text of every element matching `selector`
    pub fn texts(&self, selector: &str) -> Vec<&str> {
        self.query_selector_all(selector)
            .into_iter()
            .filter_map(|node| self.element(node))
            .map(|el| el.text.as_str())
            .collect()
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    /// Unparseable selectors match nothing
    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(e) => {
                log::warn!("{}", e);
                return Vec::new();
            }
        };

        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| selector.matches(el))
            .map(|(idx, _)| NodeId(idx))
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attribute(name)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.text = text.to_string();
        }
    }
}
