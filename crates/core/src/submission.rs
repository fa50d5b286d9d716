//! Submission kinds, new-submission records, and the moderation state machine.
//!
//! Every submission starts `pending`. Moderation moves it to `approved` or
//! `rejected`. The transition is applied unconditionally (see
//! [`ModerationAction::target_status`]).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Phone number recorded for entries created through the web form.
pub const WEB_SUBMISSION_PHONE: &str = "web-submission";

/// Dog name stored when the submitter leaves it blank.
pub const DEFAULT_DOG_NAME: &str = "Anonymous Pup";

/// Path segment that routes a moderation action to the photos table.
/// Any other segment is treated as trivia.
pub const PHOTO_PATH_SEGMENT: &str = "photo";

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// The two concrete kinds of submission. Set at creation, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionKind {
    DogPhoto,
    Trivia,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DogPhoto => "dog_photo",
            Self::Trivia => "trivia",
        }
    }

    /// Human-readable entity name for error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::DogPhoto => "Dog photo",
            Self::Trivia => "Trivia submission",
        }
    }

    /// Resolve the `{type}` segment of `/api/moderation/{type}/{id}`.
    ///
    /// Only `"photo"` selects photos; everything else falls through to trivia.
    pub fn from_moderation_segment(segment: &str) -> Self {
        if segment == PHOTO_PATH_SEGMENT {
            Self::DogPhoto
        } else {
            Self::Trivia
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Moderation status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: pending, approved, rejected"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A moderator's decision on a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }

    /// Status written by this action.
    ///
    /// Moderation is an override: the target is applied whatever the current
    /// status is, so an approved item can later be rejected (and vice versa),
    /// and repeating an action leaves the status unchanged.
    pub fn target_status(self) -> SubmissionStatus {
        match self {
            Self::Approve => SubmissionStatus::Approved,
            Self::Reject => SubmissionStatus::Rejected,
        }
    }
}

impl FromStr for ModerationAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            other => Err(CoreError::Validation(format!(
                "Invalid action '{other}'. Must be one of: approve, reject"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// New submissions
// ---------------------------------------------------------------------------

/// A dog photo ready to be inserted with status `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDogPhoto {
    pub phone_number: String,
    pub dog_name: String,
    pub image_url: String,
    pub media_type: String,
    pub owner_name: Option<String>,
}

/// A trivia fact ready to be inserted with status `pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrivia {
    pub phone_number: String,
    pub trivia_text: String,
}

/// A not-yet-persisted submission of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewSubmission {
    DogPhoto(NewDogPhoto),
    Trivia(NewTrivia),
}

impl NewSubmission {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::DogPhoto(_) => SubmissionKind::DogPhoto,
            Self::Trivia(_) => SubmissionKind::Trivia,
        }
    }

    pub fn phone_number(&self) -> &str {
        match self {
            Self::DogPhoto(photo) => &photo.phone_number,
            Self::Trivia(trivia) => &trivia.phone_number,
        }
    }
}

/// Trimmed dog name, or [`DEFAULT_DOG_NAME`] when nothing is left.
pub fn resolve_dog_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_DOG_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Phone number for a web-form entry, defaulting to [`WEB_SUBMISSION_PHONE`].
pub fn resolve_web_phone(phone_number: Option<String>) -> String {
    phone_number
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| WEB_SUBMISSION_PHONE.to_string())
}

// ---------------------------------------------------------------------------
// Web form input
// ---------------------------------------------------------------------------

/// Media type recorded for web photo submissions that do not state one.
pub const DEFAULT_WEB_MEDIA_TYPE: &str = "image/jpeg";

/// JSON body of `POST /api/submit/photo`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoForm {
    pub dog_name: Option<String>,
    pub image_url: Option<String>,
    pub media_type: Option<String>,
    pub owner_name: Option<String>,
    pub phone_number: Option<String>,
}

impl PhotoForm {
    /// Apply form defaults. Only `image_url` is required.
    pub fn into_new_photo(self) -> Result<NewDogPhoto, CoreError> {
        let image_url = required(self.image_url, "image_url")?;
        Ok(NewDogPhoto {
            phone_number: resolve_web_phone(self.phone_number),
            dog_name: resolve_dog_name(self.dog_name.as_deref().unwrap_or_default()),
            image_url,
            media_type: non_blank(self.media_type)
                .unwrap_or_else(|| DEFAULT_WEB_MEDIA_TYPE.to_string()),
            owner_name: non_blank(self.owner_name),
        })
    }
}

/// JSON body of `POST /api/submit/trivia`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriviaForm {
    pub trivia_text: Option<String>,
    pub phone_number: Option<String>,
}

impl TriviaForm {
    /// Apply form defaults. `trivia_text` is required.
    pub fn into_new_trivia(self) -> Result<NewTrivia, CoreError> {
        Ok(NewTrivia {
            phone_number: resolve_web_phone(self.phone_number),
            trivia_text: required(self.trivia_text, "trivia_text")?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &str) -> Result<String, CoreError> {
    non_blank(value).ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}
