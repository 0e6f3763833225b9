//! Simple CSS selectors.
//!
//! Supported: `tag`, `*`, `#id`, `.class`, `[attr]`, `[attr=value]` (value
//! optionally quoted), compounds of those such as `span.count[data-page-key]`,
//! and comma-separated lists. Combinators are not supported.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::memory::Element;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:#(?P<id>[\w-]+)|\.(?P<class>[\w-]+)|\[\s*(?P<attr>[\w-]+)\s*(?:=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\]\s]*))\s*)?\]|(?P<tag>[A-Za-z][\w-]*|\*))"#,
    )
    .expect("valid selector token regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unsupported selector syntax at {rest:?} in {selector:?}")]
    Unsupported { selector: String, rest: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(&element.tag) {
                return false;
            }
        }
        self.ids
            .iter()
            .all(|id| element.id.as_deref() == Some(id.as_str()))
            && self
                .classes
                .iter()
                .all(|class| element.classes.iter().any(|c| c == class))
            && self.attrs.iter().all(|attr| match (&attr.value, element.attribute(&attr.name)) {
                (None, found) => found.is_some(),
                (Some(expected), Some(found)) => *expected == found,
                (Some(_), None) => false,
            })
    }
}

/// A parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let alternatives = selector
            .split(',')
            .map(|part| parse_compound(selector, part.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { alternatives })
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(element))
    }
}

fn parse_compound(selector: &str, part: &str) -> Result<Compound, SelectorError> {
    if part.is_empty() {
        return Err(SelectorError::Empty);
    }

    let mut compound = Compound::default();
    let mut rest = part;
    let mut first = true;

    while !rest.is_empty() {
        let unsupported = || SelectorError::Unsupported {
            selector: selector.to_string(),
            rest: rest.to_string(),
        };
        let caps = TOKEN_RE.captures(rest).ok_or_else(unsupported)?;

        if let Some(id) = caps.name("id") {
            compound.ids.push(id.as_str().to_string());
        } else if let Some(class) = caps.name("class") {
            compound.classes.push(class.as_str().to_string());
        } else if let Some(attr) = caps.name("attr") {
            let value = caps
                .name("dq")
                .or_else(|| caps.name("sq"))
                .or_else(|| caps.name("bare"))
                .map(|v| v.as_str().to_string());
            compound.attrs.push(AttrMatch {
                name: attr.as_str().to_ascii_lowercase(),
                value,
            });
        } else if let Some(tag) = caps.name("tag") {
            // type selectors only lead a compound
            if !first {
                return Err(unsupported());
            }
            if tag.as_str() != "*" {
                compound.tag = Some(tag.as_str().to_string());
            }
        }

        first = false;
        rest = &rest[caps.get(0).map_or(rest.len(), |m| m.end())..];
    }

    Ok(compound)
}
