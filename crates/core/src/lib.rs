//! Screenhound domain logic.
//!
//! Everything here is pure: classification of inbound messages, owner-name
//! extraction, the moderation state machine and listing rules. Persistence
//! lives in `screenhound-db`, HTTP in `screenhound-api`.

pub mod classifier;
pub mod error;
pub mod listing;
pub mod submission;
pub mod types;
