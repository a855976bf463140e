//! JSON file storage implementation.
//!
//! Stores one JSON file per trip in a data directory and keeps small
//! per-object meta markers (version + updated_at). The profile lives in a
//! single `profile.json`. Writes are staged in memory and reach disk on
//! `commit`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use altready_core::{Trip, TripId, UserProfile};
use tokio::fs;
use tracing::{debug, warn};

use super::{Result, Storage};

/// Writes waiting for the next commit.
#[derive(Debug, Default)]
struct Staged {
    /// `None` marks a deletion
    trips: BTreeMap<TripId, Option<Trip>>,
    profile: Option<UserProfile>,
}

impl Staged {
    fn len(&self) -> usize {
        self.trips.len() + usize::from(self.profile.is_some())
    }
}

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
    staged: Staged,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directories it needs.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("trips")).await?;
        fs::create_dir_all(root.join("meta").join("trips")).await?;

        debug!(root = %root.display(), "Opened JSON storage");
        Ok(Self {
            root,
            staged: Staged::default(),
        })
    }

    fn trip_path(&self, id: TripId) -> PathBuf {
        self.root.join("trips").join(format!("{}.json", id))
    }

    fn profile_path(&self) -> PathBuf {
        self.root.join("profile.json")
    }

    fn meta_path(&self, kind: &str, id: &str) -> PathBuf {
        self.root.join("meta").join(kind).join(format!("{}.meta.json", id))
    }

    /// Read and increment per-object version, return new version.
    async fn bump_version(&self, kind: &str, id: &str) -> Result<u64> {
        let path = self.meta_path(kind, id);
        let mut version = 0u64;
        if let Ok(s) = fs::read_to_string(&path).await {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&s) {
                if let Some(v) = json.get("version").and_then(|v| v.as_u64()) {
                    version = v;
                }
            }
        }
        version += 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(&path, serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }

    async fn write_trip(&self, trip: &Trip) -> Result<()> {
        let json = serde_json::to_string_pretty(trip)?;
        fs::write(self.trip_path(trip.id), json.as_bytes()).await?;

        let version = self.bump_version("trips", &trip.id.to_string()).await?;
        debug!(trip_id = %trip.id, version, "Wrote trip");
        Ok(())
    }

    async fn remove_trip(&self, id: TripId) -> Result<()> {
        remove_if_exists(&self.trip_path(id)).await?;
        remove_if_exists(&self.meta_path("trips", &id.to_string())).await?;
        debug!(trip_id = %id, "Removed trip");
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn save_trip(&mut self, trip: &Trip) -> Result<()> {
        self.staged.trips.insert(trip.id, Some(trip.clone()));
        Ok(())
    }

    async fn load_trip(&self, id: TripId) -> Result<Option<Trip>> {
        match self.staged.trips.get(&id) {
            Some(staged) => Ok(staged.clone()),
            None => read_json(&self.trip_path(id)).await,
        }
    }

    async fn list_trips(&self) -> Result<Vec<Trip>> {
        let mut trips: Vec<Trip> = list_dir(&self.root.join("trips")).await?;
        trips.retain(|t| !self.staged.trips.contains_key(&t.id));
        trips.extend(self.staged.trips.values().flatten().cloned());

        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(trips)
    }

    async fn delete_trip(&mut self, id: TripId) -> Result<()> {
        self.staged.trips.insert(id, None);
        Ok(())
    }

    async fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.staged.profile = Some(profile.clone());
        Ok(())
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>> {
        match &self.staged.profile {
            Some(profile) => Ok(Some(profile.clone())),
            None => read_json(&self.profile_path()).await,
        }
    }

    async fn commit(&mut self, message: &str) -> Result<()> {
        for (id, change) in &self.staged.trips {
            match change {
                Some(trip) => self.write_trip(trip).await?,
                None => self.remove_trip(*id).await?,
            }
        }
        if let Some(profile) = &self.staged.profile {
            let json = serde_json::to_string_pretty(profile)?;
            fs::write(self.profile_path(), json.as_bytes()).await?;
        }

        debug!(commit = message, changes = self.staged.len(), "Commit");
        self.staged = Staged::default();
        Ok(())
    }

    async fn rollback(&mut self) -> Result<()> {
        debug!(discarded = self.staged.len(), "Rollback");
        self.staged = Staged::default();
        Ok(())
    }
}

async fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        match read_json(&path).await {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable file"),
        }
    }
    Ok(items)
}
