/// Story identifiers are opaque strings assigned by the persistence layer.
pub type StoryId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// User identifiers are the identity provider's uid.
pub type UserId = String;
