use serde::{Deserialize, Serialize};

/// Canonical name of the recycle-bin playlist.
pub const RECYCLE_BIN_NAME: &str = "Recycle Bin";

/// Canonical name of the deleted-notes playlist.
pub const DELETED_NOTES_NAME: &str = "Deleted Notes";

/// The reserved playlists that always exist exactly once and are exempt from
/// rename, delete, and drag operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemPlaylist {
    RecycleBin,
    DeletedNotes,
}

impl SystemPlaylist {
    pub const ALL: [SystemPlaylist; 2] = [SystemPlaylist::RecycleBin, SystemPlaylist::DeletedNotes];

    /// Canonical display name; also the name used in the persisted record.
    pub fn name(&self) -> &'static str {
        match self {
            SystemPlaylist::RecycleBin => RECYCLE_BIN_NAME,
            SystemPlaylist::DeletedNotes => DELETED_NOTES_NAME,
        }
    }

    /// Classifies a playlist name. Returns `None` for user playlists.
    pub fn from_name(name: &str) -> Option<SystemPlaylist> {
        match name {
            RECYCLE_BIN_NAME => Some(SystemPlaylist::RecycleBin),
            DELETED_NOTES_NAME => Some(SystemPlaylist::DeletedNotes),
            _ => None,
        }
    }
}

/// Whether a playlist is user-created or one of the reserved system playlists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    User,
    System(SystemPlaylist),
}

/// A free-text annotation attached to a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A saved link: URL, display metadata, notes, and soft-delete provenance.
///
/// The provenance fields are set only while the link resides in a system
/// playlist and are cleared on restore. Serialized field names stay camelCase
/// so stored records match the legacy on-disk shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_playlist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_link_url: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_deleted_note: bool,
}

impl Link {
    /// Creates a link with the given display metadata and no notes.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
            image: image.into(),
            notes: Vec::new(),
            original_playlist_name: None,
            original_link_url: None,
            is_deleted_note: false,
        }
    }

    /// Clears soft-delete provenance. Called when the link leaves a system
    /// playlist through a restore.
    pub fn clear_provenance(&mut self) {
        self.original_playlist_name = None;
        self.original_link_url = None;
        self.is_deleted_note = false;
    }
}

/// A named ordered collection of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
        }
    }

    pub fn kind(&self) -> PlaylistKind {
        match SystemPlaylist::from_name(&self.name) {
            Some(system) => PlaylistKind::System(system),
            None => PlaylistKind::User,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self.kind(), PlaylistKind::System(_))
    }

    /// Position of the link with exactly this URL, if present.
    ///
    /// URL uniqueness is enforced per playlist, so at most one position matches.
    pub fn find_link(&self, url: &str) -> Option<usize> {
        self.links.iter().position(|link| link.url == url)
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.find_link(url).is_some()
    }
}
