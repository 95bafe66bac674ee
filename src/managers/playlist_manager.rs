//! Playlist Manager for linkdeck.
//!
//! Implements `PlaylistManagerTrait` — create, rename, delete, select, and
//! reorder operations on the ordered playlist collection. Every mutation
//! persists the library before returning.

use crate::database::Database;
use crate::services::prompt_service::PromptServiceTrait;
use crate::store::library::LinkLibrary;
use crate::types::errors::PlaylistError;
use crate::types::outcome::{PlaylistDeleteOutcome, RenameOutcome};
use crate::types::playlist::{Playlist, SystemPlaylist};

/// Trait defining playlist store operations.
pub trait PlaylistManagerTrait {
    fn create_playlist(&mut self, name: &str) -> Result<usize, PlaylistError>;
    fn rename_playlist(
        &mut self,
        index: usize,
        new_name: &str,
    ) -> Result<RenameOutcome, PlaylistError>;
    fn delete_playlist(&mut self, index: usize) -> Result<PlaylistDeleteOutcome, PlaylistError>;
    fn select_playlist(&mut self, index: usize) -> Result<(), PlaylistError>;
    fn reorder_playlist(&mut self, from: usize, to: usize) -> Result<(), PlaylistError>;
}

/// Playlist manager operating on the shared library.
///
/// Constructed on demand around a mutable borrow of the library, one per
/// request at the frontend boundary.
pub struct PlaylistManager<'a> {
    library: &'a mut LinkLibrary,
    db: &'a Database,
    prompt: &'a dyn PromptServiceTrait,
}

impl<'a> PlaylistManager<'a> {
    pub fn new(
        library: &'a mut LinkLibrary,
        db: &'a Database,
        prompt: &'a dyn PromptServiceTrait,
    ) -> Self {
        Self {
            library,
            db,
            prompt,
        }
    }

    fn save(&self) -> Result<(), PlaylistError> {
        self.library
            .save(self.db)
            .map_err(|e| PlaylistError::Storage(e.to_string()))
    }
}

impl PlaylistManagerTrait for PlaylistManager<'_> {
    /// Appends a new empty playlist and makes it active.
    fn create_playlist(&mut self, name: &str) -> Result<usize, PlaylistError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlaylistError::EmptyName);
        }
        if SystemPlaylist::from_name(name).is_some() {
            return Err(PlaylistError::ReservedName(name.to_string()));
        }
        if self.library.position_by_name(name).is_some() {
            return Err(PlaylistError::DuplicateName(name.to_string()));
        }

        let index = self.library.push_playlist(Playlist::new(name));
        self.library.set_active(Some(index));
        self.save()?;
        Ok(index)
    }

    /// Renames a user playlist in place. Empty or unchanged input reverts
    /// silently; a collision with any existing playlist name is a
    /// user-visible error. The active selection is an index, so it needs no
    /// fixup.
    fn rename_playlist(
        &mut self,
        index: usize,
        new_name: &str,
    ) -> Result<RenameOutcome, PlaylistError> {
        let new_name = new_name.trim();
        let current = self
            .library
            .playlist(index)
            .ok_or(PlaylistError::InvalidIndex(index))?;
        if current.is_system() {
            return Err(PlaylistError::SystemPlaylist(current.name.clone()));
        }
        if new_name.is_empty() || new_name == current.name {
            return Ok(RenameOutcome::Unchanged);
        }
        // System playlists always exist, so renaming to a reserved name also
        // collides here.
        if self.library.position_by_name(new_name).is_some() {
            return Err(PlaylistError::DuplicateName(new_name.to_string()));
        }

        if let Some(playlist) = self.library.playlist_mut(index) {
            playlist.name = new_name.to_string();
        }
        self.save()?;
        Ok(RenameOutcome::Renamed)
    }

    /// Deletes a user playlist after confirmation, cascading its links into
    /// the Recycle Bin stamped with their origin. A link whose URL already
    /// exists in the bin is dropped; the outcome reports how many.
    fn delete_playlist(&mut self, index: usize) -> Result<PlaylistDeleteOutcome, PlaylistError> {
        let target = self
            .library
            .playlist(index)
            .ok_or(PlaylistError::InvalidIndex(index))?;
        if target.is_system() {
            return Err(PlaylistError::SystemPlaylist(target.name.clone()));
        }

        let message = format!(
            "Are you sure you want to delete the playlist \"{}\"? Its links will be moved to the Recycle Bin.",
            target.name
        );
        if !self.prompt.confirm(&message) {
            return Ok(PlaylistDeleteOutcome::Cancelled);
        }

        let removed = self.library.remove_playlist(index);
        let mut moved_to_bin = 0;
        let mut dropped_duplicates = 0;
        let bin = self.library.system_playlist_mut(SystemPlaylist::RecycleBin);
        for mut link in removed.links {
            link.original_playlist_name = Some(removed.name.clone());
            if bin.contains_url(&link.url) {
                dropped_duplicates += 1;
            } else {
                bin.links.push(link);
                moved_to_bin += 1;
            }
        }

        self.save()?;
        Ok(PlaylistDeleteOutcome::Deleted {
            moved_to_bin,
            dropped_duplicates,
        })
    }

    /// Pure selection change; the stored record is unaffected.
    fn select_playlist(&mut self, index: usize) -> Result<(), PlaylistError> {
        if self.library.playlist(index).is_none() {
            return Err(PlaylistError::InvalidIndex(index));
        }
        self.library.set_active(Some(index));
        Ok(())
    }

    /// Moves a playlist within the display order. System playlists are never
    /// draggable, though they may still shift as others move around them.
    fn reorder_playlist(&mut self, from: usize, to: usize) -> Result<(), PlaylistError> {
        let source = self
            .library
            .playlist(from)
            .ok_or(PlaylistError::InvalidIndex(from))?;
        if source.is_system() {
            return Err(PlaylistError::SystemPlaylist(source.name.clone()));
        }
        if self.library.playlist(to).is_none() {
            return Err(PlaylistError::InvalidIndex(to));
        }
        if from == to {
            return Ok(());
        }

        self.library.move_playlist(from, to);
        self.save()?;
        Ok(())
    }
}
