use serde::{Deserialize, Serialize};

/// Numeric comment identifier assigned by the server
pub type CommentId = u64;

/// A single comment as returned by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentData {
    pub id: CommentId,
    pub content: String,
    pub user_id: u64,
    pub nick: String,
    pub email_encrypted: String,
    pub link: String,
    pub ua: String,
    pub date: String,
    pub is_collapsed: bool,
    pub is_pending: bool,
    pub is_pinned: bool,
    pub is_allow_reply: bool,
    pub is_verified: bool,
    /// Parent comment id, `0` for a root comment
    pub rid: CommentId,
    pub badge_name: String,
    pub badge_color: String,
    pub visible: bool,
    pub vote_up: u64,
    pub vote_down: u64,
    pub page_key: String,
    pub page_url: String,
    pub site_name: String,
}

impl CommentData {
    /// Minimal comment with an id and content, everything else defaulted
    pub fn new(id: CommentId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            visible: true,
            is_allow_reply: true,
            ..Default::default()
        }
    }

    pub fn is_root(&self) -> bool {
        self.rid == 0
    }
}
