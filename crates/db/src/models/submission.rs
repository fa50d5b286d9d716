use serde::Serialize;
use screenhound_core::submission::SubmissionKind;
use screenhound_core::types::DbId;

use super::{DogPhoto, TriviaSubmission};

/// A stored submission of either kind.
///
/// Serializes as the bare row; the row's own `type` column tells the kinds
/// apart.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Submission {
    DogPhoto(DogPhoto),
    Trivia(TriviaSubmission),
}

impl Submission {
    pub fn id(&self) -> DbId {
        match self {
            Self::DogPhoto(p) => p.id,
            Self::Trivia(t) => t.id,
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::DogPhoto(_) => SubmissionKind::DogPhoto,
            Self::Trivia(_) => SubmissionKind::Trivia,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            Self::DogPhoto(p) => &p.status,
            Self::Trivia(t) => &t.status,
        }
    }
}

impl From<DogPhoto> for Submission {
    fn from(photo: DogPhoto) -> Self {
        Self::DogPhoto(photo)
    }
}

impl From<TriviaSubmission> for Submission {
    fn from(trivia: TriviaSubmission) -> Self {
        Self::Trivia(trivia)
    }
}
