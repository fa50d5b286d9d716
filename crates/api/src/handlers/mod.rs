pub mod content;
pub mod moderation;
pub mod submit;
pub mod webhook;
