//! Remote API
//!
//! The slice of the comment server API the stat widget needs.

pub mod http;

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

pub use http::{ApiError, HttpApi};

/// Counts keyed by page key. NaN marks a count that is not known.
pub type CountData = HashMap<String, f64>;

/// Which per-page statistic to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatQuery {
    PagePv,
    PageComment,
}

impl StatQuery {
    pub fn as_str(self) -> &'static str {
        match self {
            StatQuery::PagePv => "page_pv",
            StatQuery::PageComment => "page_comment",
        }
    }
}

impl fmt::Display for StatQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page statistics endpoints
#[async_trait]
pub trait PageApi: Send + Sync {
    /// Record a view of the current page and return its new view count
    async fn pv(&self) -> Result<f64>;

    /// Fetch one statistic for a batch of pages
    async fn stat(&self, query: StatQuery, page_keys: &[String]) -> Result<CountData>;
}
