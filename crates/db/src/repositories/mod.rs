//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod dog_photo_repo;
pub mod trivia_repo;

pub use dog_photo_repo::DogPhotoRepo;
pub use trivia_repo::TriviaRepo;
