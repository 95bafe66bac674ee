//! The in-memory link library and its persistence.
//!
//! [`LinkLibrary`] owns every playlist in display order plus the active
//! selection. The whole library is persisted as one JSON record under one
//! key in the `storage` table; loading migrates legacy record shapes before
//! deserializing.
//!
//! The active playlist is tracked by index, never by reference, so mutations
//! of the playlist vector cannot leave a dangling alias. All index fixups
//! (remove, reorder) happen here.

use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;
use serde_json::{json, Value};

use crate::database::Database;
use crate::types::errors::StorageError;
use crate::types::playlist::{Playlist, SystemPlaylist};

/// Storage key under which the whole library is persisted.
pub const STORAGE_KEY: &str = "link_playlists";

/// Every playlist in display order plus the active selection.
#[derive(Debug, Default)]
pub struct LinkLibrary {
    playlists: Vec<Playlist>,
    active: Option<usize>,
}

impl LinkLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the library from the database.
    ///
    /// Legacy record shapes are migrated before deserializing, and both
    /// system playlists are created (and persisted) if absent, so a loaded
    /// library always satisfies the system-playlist invariant.
    pub fn load(db: &Database) -> Result<Self, StorageError> {
        let playlists = match read_record(db, STORAGE_KEY)? {
            Some(raw) => {
                let value: Value = serde_json::from_str(&raw)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                serde_json::from_value(normalize_record(value))
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?
            }
            None => Vec::new(),
        };

        let mut library = Self {
            playlists,
            active: None,
        };
        if library.ensure_system_playlists() {
            library.save(db)?;
        }
        Ok(library)
    }

    /// Serializes every playlist as one JSON record under [`STORAGE_KEY`].
    ///
    /// The active selection is session state and is not persisted.
    pub fn save(&self, db: &Database) -> Result<(), StorageError> {
        let record = serde_json::to_string(&self.playlists)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        write_record(db, STORAGE_KEY, &record)
    }

    /// Appends any missing system playlist. Returns true when one was created.
    pub fn ensure_system_playlists(&mut self) -> bool {
        let mut created = false;
        for system in SystemPlaylist::ALL {
            if self.position_by_name(system.name()).is_none() {
                self.playlists.push(Playlist::new(system.name()));
                created = true;
            }
        }
        created
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    pub fn playlist_mut(&mut self, index: usize) -> Option<&mut Playlist> {
        self.playlists.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Position of the playlist with exactly this name, if present.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.playlists.iter().position(|p| p.name == name)
    }

    /// Position of the first user (non-system) playlist in display order.
    pub fn first_user_playlist(&self) -> Option<usize> {
        self.playlists.iter().position(|p| !p.is_system())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
    }

    pub fn active_playlist(&self) -> Option<&Playlist> {
        self.active.and_then(|index| self.playlists.get(index))
    }

    pub fn active_playlist_mut(&mut self) -> Option<&mut Playlist> {
        match self.active {
            Some(index) => self.playlists.get_mut(index),
            None => None,
        }
    }

    /// Appends a playlist and returns its position.
    pub fn push_playlist(&mut self, playlist: Playlist) -> usize {
        self.playlists.push(playlist);
        self.playlists.len() - 1
    }

    /// Removes the playlist at `index` and fixes the active selection:
    /// cleared when it pointed at the removed playlist, shifted when it
    /// pointed past it.
    ///
    /// Callers must bounds-check `index`.
    pub fn remove_playlist(&mut self, index: usize) -> Playlist {
        let removed = self.playlists.remove(index);
        self.active = match self.active {
            Some(active) if active == index => None,
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        removed
    }

    /// Splice-moves the playlist at `from` to position `to`, remapping the
    /// active selection to follow the moved element. `from == to` is a no-op.
    ///
    /// Callers must bounds-check both positions.
    pub fn move_playlist(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let playlist = self.playlists.remove(from);
        self.playlists.insert(to, playlist);
        self.active = self.active.map(|active| {
            if active == from {
                to
            } else if from < active && active <= to {
                active - 1
            } else if to <= active && active < from {
                active + 1
            } else {
                active
            }
        });
    }

    /// Mutable access to a system playlist, creating it lazily if a caller
    /// reaches for one before `load` ran.
    pub fn system_playlist_mut(&mut self, system: SystemPlaylist) -> &mut Playlist {
        let index = match self.position_by_name(system.name()) {
            Some(index) => index,
            None => self.push_playlist(Playlist::new(system.name())),
        };
        &mut self.playlists[index]
    }
}

/// Splice-moves `items[from]` to position `to`. `from == to` is a no-op.
///
/// Callers must bounds-check both positions.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

fn read_record(db: &Database, key: &str) -> Result<Option<String>, StorageError> {
    let result = db.connection().query_row(
        "SELECT value FROM storage WHERE key = ?1",
        params![key],
        |row| row.get::<_, String>(0),
    );
    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StorageError::DatabaseError(e.to_string())),
    }
}

fn write_record(db: &Database, key: &str, value: &str) -> Result<(), StorageError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    db.connection()
        .execute(
            "INSERT OR REPLACE INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, now],
        )
        .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
    Ok(())
}

/// Migrates legacy persisted shapes into the current record format before
/// typed deserialization. Unknown shapes pass through and fail loudly in
/// `serde_json::from_value` instead of being silently dropped.
fn normalize_record(value: Value) -> Value {
    match value {
        Value::Array(playlists) => {
            Value::Array(playlists.into_iter().map(normalize_playlist).collect())
        }
        other => other,
    }
}

fn normalize_playlist(value: Value) -> Value {
    match value {
        Value::Object(mut playlist) => {
            if let Some(links) = playlist.remove("links") {
                let links = match links {
                    Value::Array(items) => {
                        Value::Array(items.into_iter().map(normalize_link).collect())
                    }
                    other => other,
                };
                playlist.insert("links".to_string(), links);
            }
            Value::Object(playlist)
        }
        other => other,
    }
}

fn normalize_link(value: Value) -> Value {
    match value {
        // The oldest records stored links as bare URL strings.
        Value::String(url) => json!({
            "url": url,
            "title": url,
            "description": "",
            "image": "",
            "notes": [],
        }),
        Value::Object(mut link) => {
            let notes = match link.remove("notes") {
                Some(Value::Array(notes)) => Value::Array(notes),
                // A legacy scalar notes field becomes a single note.
                Some(Value::String(text)) if !text.is_empty() => json!([{ "text": text }]),
                // Empty string, or any other non-array value, resets to no notes.
                _ => json!([]),
            };
            link.insert("notes".to_string(), notes);
            Value::Object(link)
        }
        other => other,
    }
}
