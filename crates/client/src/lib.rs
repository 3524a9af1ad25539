//! HTTP implementations of the story collaborators.
//!
//! [`HttpStoryStore`] talks to the heritage API server and implements both
//! [`StoryRepository`](heritage_core::collaborator::StoryRepository) and
//! [`StoryModeration`](heritage_core::collaborator::StoryModeration).

pub mod config;
pub mod error;
pub mod store;

pub use config::ClientConfig;
pub use error::ClientError;
pub use store::HttpStoryStore;
