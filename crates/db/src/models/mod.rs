//! Row structs for the submission tables.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row. Insert inputs are the `New*` records from `screenhound_core`.

pub mod dog_photo;
pub mod submission;
pub mod trivia;

pub use dog_photo::DogPhoto;
pub use submission::Submission;
pub use trivia::TriviaSubmission;
