use serde::{Deserialize, Serialize};

use super::comment::CommentData;

/// Where a fetched page of comments goes relative to the held list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFetchMode {
    #[default]
    Append,
    Prepend,
}

/// Parameters for a comment list fetch.
///
/// Every field is optional so the same type doubles as a partial filter
/// for [`DataManager::fetch_comments`](crate::data::DataManager::fetch_comments).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFetchParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub flat_mode: Option<bool>,
    pub mode: Option<ListFetchMode>,
}

/// Summary of a list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListData {
    pub comments: Vec<CommentData>,
    pub count: u64,
    pub roots_count: u64,
}

/// What the last list fetch asked for and what came back
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListLastFetchData {
    pub params: ListFetchParams,
    pub data: Option<ListData>,
    pub error: Option<String>,
}
