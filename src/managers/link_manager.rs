//! Link operations within the active playlist.
//!
//! Implements `LinkManagerTrait` — adding links with best-effort metadata
//! enrichment, the soft-delete transition into the Recycle Bin, the restore
//! transition back out of the system playlists, and reordering.

use url::Url;

use crate::database::Database;
use crate::services::metadata_service::MetadataServiceTrait;
use crate::services::prompt_service::PromptServiceTrait;
use crate::store::library::{move_item, LinkLibrary};
use crate::types::errors::LinkError;
use crate::types::metadata::LinkMetadata;
use crate::types::outcome::{DeleteOutcome, RestoreOutcome};
use crate::types::playlist::{Link, Note, Playlist, SystemPlaylist};

/// Playlist created when a link with no recorded origin is restored and no
/// user playlist exists to receive it.
pub const FALLBACK_PLAYLIST_NAME: &str = "Restored Links";

/// Trait defining link operations.
pub trait LinkManagerTrait {
    fn add_link(&mut self, url: &str) -> Result<usize, LinkError>;
    fn delete_link(&mut self, index: usize) -> Result<DeleteOutcome, LinkError>;
    fn restore_link(&mut self, index: usize) -> Result<RestoreOutcome, LinkError>;
    fn reorder_links(&mut self, from: usize, to: usize) -> Result<(), LinkError>;
}

/// Link manager operating on the shared library.
pub struct LinkManager<'a> {
    library: &'a mut LinkLibrary,
    db: &'a Database,
    metadata: &'a dyn MetadataServiceTrait,
    prompt: &'a dyn PromptServiceTrait,
}

impl<'a> LinkManager<'a> {
    pub fn new(
        library: &'a mut LinkLibrary,
        db: &'a Database,
        metadata: &'a dyn MetadataServiceTrait,
        prompt: &'a dyn PromptServiceTrait,
    ) -> Self {
        Self {
            library,
            db,
            metadata,
            prompt,
        }
    }

    fn save(&self) -> Result<(), LinkError> {
        self.library
            .save(self.db)
            .map_err(|e| LinkError::Storage(e.to_string()))
    }

    fn active_index(&self) -> Result<usize, LinkError> {
        self.library
            .active_index()
            .ok_or(LinkError::NoActivePlaylist)
    }

    /// Reattaches a deleted-note record to its source link as a new note, if
    /// both the original playlist and link still exist.
    fn reattach_note(&mut self, record: &Link) -> Option<RestoreOutcome> {
        let playlist_name = record.original_playlist_name.as_deref()?;
        let link_url = record.original_link_url.as_deref()?;
        let playlist_index = self.library.position_by_name(playlist_name)?;
        let playlist = self.library.playlist_mut(playlist_index)?;
        let link_index = playlist.find_link(link_url)?;

        playlist.links[link_index]
            .notes
            .push(Note::new(record.title.clone()));
        Some(RestoreOutcome::NoteReattached {
            playlist: playlist_name.to_string(),
            link_url: link_url.to_string(),
        })
    }
}

impl LinkManagerTrait for LinkManager<'_> {
    /// Adds a link to the active playlist.
    ///
    /// A bare host gets `http://` prepended; anything that still does not
    /// parse as an absolute URL is rejected, as is an exact-URL duplicate
    /// within the playlist. Metadata enrichment is best-effort: a failed
    /// lookup is logged and replaced by the URL itself.
    fn add_link(&mut self, url: &str) -> Result<usize, LinkError> {
        let active = self.active_index()?;
        let url = normalize_url(url)?;

        let playlist = self
            .library
            .playlist(active)
            .ok_or(LinkError::NoActivePlaylist)?;
        if playlist.contains_url(&url) {
            return Err(LinkError::DuplicateUrl(url));
        }

        let metadata = match self.metadata.fetch(&url) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("metadata lookup failed for {}: {}", url, e);
                LinkMetadata::fallback(&url)
            }
        };
        let title = match metadata.title {
            Some(title) if !title.is_empty() => title,
            _ => url.clone(),
        };
        let link = Link::new(
            url,
            title,
            metadata.description.unwrap_or_default(),
            metadata.image.unwrap_or_default(),
        );

        let playlist = self
            .library
            .playlist_mut(active)
            .ok_or(LinkError::NoActivePlaylist)?;
        playlist.links.push(link);
        let index = playlist.links.len() - 1;
        self.save()?;
        Ok(index)
    }

    /// Deletes a link from the active playlist after confirmation.
    ///
    /// Inside a system playlist the removal is permanent. Otherwise the link
    /// is stamped with its origin and moved into the Recycle Bin, unless a
    /// same-URL link is already there, in which case the record is dropped
    /// and the outcome says so.
    fn delete_link(&mut self, index: usize) -> Result<DeleteOutcome, LinkError> {
        let active = self.active_index()?;
        let playlist = self
            .library
            .playlist(active)
            .ok_or(LinkError::NoActivePlaylist)?;
        let link = playlist
            .links
            .get(index)
            .ok_or(LinkError::InvalidIndex(index))?;
        let title = link.title.clone();
        let playlist_name = playlist.name.clone();

        if playlist.is_system() {
            let message = format!(
                "This will permanently delete the link. This action cannot be undone.\n\n\"{}\"",
                title
            );
            if !self.prompt.confirm(&message) {
                return Ok(DeleteOutcome::Cancelled);
            }
            if let Some(playlist) = self.library.playlist_mut(active) {
                playlist.links.remove(index);
            }
            self.save()?;
            return Ok(DeleteOutcome::PermanentlyDeleted);
        }

        let message = format!(
            "Are you sure you want to move this link to the Recycle Bin?\n\n\"{}\"",
            title
        );
        if !self.prompt.confirm(&message) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let mut link = match self.library.playlist_mut(active) {
            Some(playlist) => playlist.links.remove(index),
            None => return Err(LinkError::NoActivePlaylist),
        };
        link.original_playlist_name = Some(playlist_name);

        let bin = self.library.system_playlist_mut(SystemPlaylist::RecycleBin);
        let outcome = if bin.contains_url(&link.url) {
            // Same URL already recycled: the record is dropped.
            DeleteOutcome::DroppedDuplicate
        } else {
            bin.links.push(link);
            DeleteOutcome::MovedToRecycleBin
        };
        self.save()?;
        Ok(outcome)
    }

    /// Restores a record out of the active system playlist.
    ///
    /// Deleted-note records reattach to their source link when it still
    /// exists and otherwise fall through to an ordinary link restore.
    /// Ordinary records return to their recorded origin (recreated empty if
    /// it was deleted), or to the first user playlist when no origin was
    /// recorded. A same-URL link at the destination means the record is
    /// discarded. Provenance is cleared on every path.
    fn restore_link(&mut self, index: usize) -> Result<RestoreOutcome, LinkError> {
        let active = self.active_index()?;
        let playlist = self
            .library
            .playlist(active)
            .ok_or(LinkError::NoActivePlaylist)?;
        if !playlist.is_system() {
            return Err(LinkError::NotInSystemPlaylist);
        }
        if index >= playlist.links.len() {
            return Err(LinkError::InvalidIndex(index));
        }

        let mut record = match self.library.playlist_mut(active) {
            Some(playlist) => playlist.links.remove(index),
            None => return Err(LinkError::NoActivePlaylist),
        };

        if record.is_deleted_note {
            if let Some(outcome) = self.reattach_note(&record) {
                self.save()?;
                return Ok(outcome);
            }
            // The original playlist or link is gone: restore as an ordinary link.
            record.is_deleted_note = false;
        }

        let origin = record.original_playlist_name.take();
        record.clear_provenance();

        let outcome = match origin {
            Some(name) => match self.library.position_by_name(&name) {
                Some(target) => {
                    let playlist = match self.library.playlist_mut(target) {
                        Some(playlist) => playlist,
                        None => return Err(LinkError::InvalidIndex(target)),
                    };
                    if playlist.contains_url(&record.url) {
                        RestoreOutcome::DuplicateSkipped { playlist: name }
                    } else {
                        playlist.links.push(record);
                        RestoreOutcome::Restored { playlist: name }
                    }
                }
                None => {
                    // The origin was deleted meanwhile; recreate it.
                    let mut playlist = Playlist::new(name.clone());
                    playlist.links.push(record);
                    self.library.push_playlist(playlist);
                    RestoreOutcome::RestoredToRecreated { playlist: name }
                }
            },
            None => match self.library.first_user_playlist() {
                Some(target) => {
                    let playlist = match self.library.playlist_mut(target) {
                        Some(playlist) => playlist,
                        None => return Err(LinkError::InvalidIndex(target)),
                    };
                    let name = playlist.name.clone();
                    if playlist.contains_url(&record.url) {
                        RestoreOutcome::DuplicateSkipped { playlist: name }
                    } else {
                        playlist.links.push(record);
                        RestoreOutcome::RestoredToFallback { playlist: name }
                    }
                }
                None => {
                    let mut playlist = Playlist::new(FALLBACK_PLAYLIST_NAME);
                    playlist.links.push(record);
                    self.library.push_playlist(playlist);
                    RestoreOutcome::RestoredToFallback {
                        playlist: FALLBACK_PLAYLIST_NAME.to_string(),
                    }
                }
            },
        };
        self.save()?;
        Ok(outcome)
    }

    /// Moves a link within the active playlist. `from == to` is a no-op.
    fn reorder_links(&mut self, from: usize, to: usize) -> Result<(), LinkError> {
        let active = self.active_index()?;
        let playlist = self
            .library
            .playlist_mut(active)
            .ok_or(LinkError::NoActivePlaylist)?;
        let count = playlist.links.len();
        if from >= count {
            return Err(LinkError::InvalidIndex(from));
        }
        if to >= count {
            return Err(LinkError::InvalidIndex(to));
        }
        if from == to {
            return Ok(());
        }

        move_item(&mut playlist.links, from, to);
        self.save()?;
        Ok(())
    }
}

/// Validates the input as an absolute URL, prepending `http://` when no
/// scheme is present. Returns the exact string that will be stored;
/// duplicate checks compare stored strings, not parsed forms.
fn normalize_url(raw: &str) -> Result<String, LinkError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LinkError::InvalidUrl(raw.to_string()));
    }
    match Url::parse(raw) {
        Ok(_) => Ok(raw.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let candidate = format!("http://{}", raw);
            match Url::parse(&candidate) {
                Ok(_) => Ok(candidate),
                Err(_) => Err(LinkError::InvalidUrl(raw.to_string())),
            }
        }
        Err(_) => Err(LinkError::InvalidUrl(raw.to_string())),
    }
}
