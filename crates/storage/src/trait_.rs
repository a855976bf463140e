//! Storage trait abstraction.

use async_trait::async_trait;
use altready_core::{Trip, TripId, UserProfile};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage abstraction for saved trips and the user profile.
///
/// Trips are stored with their plan snapshot and must be read back
/// unchanged. Writes are visible to reads on the same handle at once but
/// only become durable on `commit`; `rollback` discards them.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Trip operations ===

    /// Save a trip (create or update).
    async fn save_trip(&mut self, trip: &Trip) -> Result<()>;

    /// Load a trip by ID.
    async fn load_trip(&self, id: TripId) -> Result<Option<Trip>>;

    /// List all trips, most recently created first.
    async fn list_trips(&self) -> Result<Vec<Trip>>;

    /// Delete a trip. Deleting a missing trip is not an error.
    async fn delete_trip(&mut self, id: TripId) -> Result<()>;

    // === Profile operations ===

    /// Save the user profile.
    async fn save_profile(&mut self, profile: &UserProfile) -> Result<()>;

    /// Load the user profile, if one was saved.
    async fn load_profile(&self) -> Result<Option<UserProfile>>;

    // === Transaction support ===

    /// Persist every staged write.
    async fn commit(&mut self, message: &str) -> Result<()>;

    /// Discard every write staged since the last commit.
    async fn rollback(&mut self) -> Result<()>;
}
