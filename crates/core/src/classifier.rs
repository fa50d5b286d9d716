//! Inbound message classification and owner-name extraction.
//!
//! A message with at least one media attachment becomes a dog photo; anything
//! else becomes a trivia fact. Owner names are inferred from the message text
//! by an ordered list of rules where the first match wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::submission::{
    resolve_dog_name, NewDogPhoto, NewSubmission, NewTrivia, SubmissionKind,
};

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// The fields of an inbound SMS/MMS relevant to classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender identifier (phone number).
    pub from: String,
    /// Free-text body, untrimmed.
    pub body: String,
    /// Media attachment count as delivered by the provider (text).
    pub num_media: Option<String>,
    /// URL of the first attachment.
    pub media_url: Option<String>,
    /// Content type of the first attachment.
    pub media_content_type: Option<String>,
}

/// Result of classifying an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub submission: NewSubmission,
    /// Text sent back to the submitter.
    pub reply: String,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify an inbound message and build the record to persist.
///
/// Never fails: every input maps to either a photo or a trivia submission.
pub fn classify(message: &InboundMessage) -> Classification {
    let submission = if parse_media_count(message.num_media.as_deref()) > 0 {
        NewSubmission::DogPhoto(NewDogPhoto {
            phone_number: message.from.clone(),
            dog_name: resolve_dog_name(&message.body),
            image_url: message.media_url.clone().unwrap_or_default(),
            media_type: message.media_content_type.clone().unwrap_or_default(),
            owner_name: extract_owner_name(&message.body).map(str::to_string),
        })
    } else {
        NewSubmission::Trivia(NewTrivia {
            phone_number: message.from.clone(),
            trivia_text: message.body.trim().to_string(),
        })
    };

    let reply = auto_reply(submission.kind());
    Classification { submission, reply }
}

/// Parse a media count the way a lenient integer parse would.
///
/// Leading whitespace and an optional sign are accepted, then the leading run
/// of ASCII digits is read. Missing or non-numeric input yields `0`.
pub fn parse_media_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -value
    } else {
        value
    }
}

/// Auto-reply text for a classified submission.
pub fn auto_reply(kind: SubmissionKind) -> String {
    let noun = match kind {
        SubmissionKind::DogPhoto => "photo",
        SubmissionKind::Trivia => "dog fact",
    };
    format!("Thanks for submitting to Screenhound! 🐕 Your {noun} will appear on screen once approved!")
}

// ---------------------------------------------------------------------------
// Owner-name extraction
// ---------------------------------------------------------------------------

/// A single owner-name pattern. Group 1 of `pattern` is the name.
pub struct OwnerRule {
    pub name: &'static str,
    pattern: Regex,
}

impl OwnerRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid regex"),
        }
    }

    /// Apply this rule alone.
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Owner-name rules in evaluation order. Compiled once, reused forever.
///
/// 1. `"Max - Sarah"`: trailing hyphen, en dash or em dash.
/// 2. `"Max (Sarah)"`: trailing parenthesized name.
/// 3. `"Max by Sarah"`: trailing `by`, matched case-insensitively.
///
/// Names are ASCII letters only and must run to the end of the text.
pub static OWNER_RULES: LazyLock<[OwnerRule; 3]> = LazyLock::new(|| {
    [
        OwnerRule::new("dash", r"[-\x{2013}\x{2014}]\s*([A-Za-z]+)$"),
        OwnerRule::new("parenthesized", r"\(([A-Za-z]+)\)$"),
        OwnerRule::new("by", r"(?i:by)\s+([A-Za-z]+)$"),
    ]
});

/// Infer the owner's name from free text, or `None` if no rule matches.
pub fn extract_owner_name(text: &str) -> Option<&str> {
    OWNER_RULES.iter().find_map(|rule| rule.extract(text))
}
