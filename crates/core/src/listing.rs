//! Listing rules for moderation queues and the display feed.
//!
//! Pending queues are first-in-first-out; the public feed shows the most
//! recent approved content, capped per kind.

use crate::submission::SubmissionStatus;

/// Maximum approved photos returned by the content feed.
pub const APPROVED_PHOTO_LIMIT: i64 = 20;

/// Maximum approved trivia items returned by the content feed.
pub const APPROVED_TRIVIA_LIMIT: i64 = 10;

/// Owner shown on screen when a photo has no known owner.
pub const DEFAULT_OWNER_DISPLAY: &str = "A Friend";

/// Ordering by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending `created_at`.
    OldestFirst,
    /// Descending `created_at`.
    NewestFirst,
}

impl SortOrder {
    /// SQL fragment for an `ORDER BY` clause.
    pub fn sql(self) -> &'static str {
        match self {
            Self::OldestFirst => "created_at ASC, id ASC",
            Self::NewestFirst => "created_at DESC, id DESC",
        }
    }
}

/// A status-filtered listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub status: SubmissionStatus,
    pub order: SortOrder,
    /// `None` means unbounded.
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Moderation queue: every pending item, oldest first.
    pub fn pending() -> Self {
        Self {
            status: SubmissionStatus::Pending,
            order: SortOrder::OldestFirst,
            limit: None,
        }
    }

    /// Display feed: the newest `limit` approved items.
    pub fn approved_recent(limit: i64) -> Self {
        Self {
            status: SubmissionStatus::Approved,
            order: SortOrder::NewestFirst,
            limit: Some(limit),
        }
    }
}

/// Owner name to display, falling back to [`DEFAULT_OWNER_DISPLAY`].
pub fn display_owner(owner_name: Option<&str>) -> &str {
    owner_name.unwrap_or(DEFAULT_OWNER_DISPLAY)
}
