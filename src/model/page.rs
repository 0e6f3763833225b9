use serde::{Deserialize, Serialize};

use super::comment::CommentId;

/// Page metadata for the page the widget is embedded in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub id: u64,
    pub admin_only: bool,
    pub key: String,
    pub url: String,
    pub title: String,
    pub site_name: String,
    pub vote_up: u64,
    pub vote_down: u64,
    pub pv: u64,
}

/// A reply notification for the current user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyData {
    pub comment_id: CommentId,
    pub user_id: u64,
    pub is_read: bool,
    pub is_emailed: bool,
    pub read_link: String,
}
