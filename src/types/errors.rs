use std::fmt;

// === PlaylistError ===

/// Errors related to playlist store operations.
#[derive(Debug)]
pub enum PlaylistError {
    /// The playlist name is empty.
    EmptyName,
    /// The name is reserved for a system playlist.
    ReservedName(String),
    /// A playlist with the given name already exists.
    DuplicateName(String),
    /// The provided playlist index is out of bounds.
    InvalidIndex(usize),
    /// The operation is not allowed on a system playlist.
    SystemPlaylist(String),
    /// Persisting the library failed.
    Storage(String),
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::EmptyName => write!(f, "Playlist name cannot be empty"),
            PlaylistError::ReservedName(name) => {
                write!(f, "\"{}\" is a reserved playlist name", name)
            }
            PlaylistError::DuplicateName(name) => {
                write!(f, "A playlist named \"{}\" already exists", name)
            }
            PlaylistError::InvalidIndex(index) => write!(f, "Invalid playlist index: {}", index),
            PlaylistError::SystemPlaylist(name) => {
                write!(f, "The \"{}\" playlist cannot be modified", name)
            }
            PlaylistError::Storage(msg) => write!(f, "Playlist storage error: {}", msg),
        }
    }
}

impl std::error::Error for PlaylistError {}

// === LinkError ===

/// Errors related to link operations.
#[derive(Debug)]
pub enum LinkError {
    /// No playlist is currently selected.
    NoActivePlaylist,
    /// The input does not parse as an absolute URL.
    InvalidUrl(String),
    /// A link with the given URL already exists in the active playlist.
    DuplicateUrl(String),
    /// The provided link index is out of bounds.
    InvalidIndex(usize),
    /// Restore was requested outside a system playlist.
    NotInSystemPlaylist,
    /// Persisting the library failed.
    Storage(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NoActivePlaylist => write!(f, "No playlist is selected"),
            LinkError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            LinkError::DuplicateUrl(url) => {
                write!(f, "This link already exists in the current playlist: {}", url)
            }
            LinkError::InvalidIndex(index) => write!(f, "Invalid link index: {}", index),
            LinkError::NotInSystemPlaylist => {
                write!(f, "Only links in the Recycle Bin or Deleted Notes can be restored")
            }
            LinkError::Storage(msg) => write!(f, "Link storage error: {}", msg),
        }
    }
}

impl std::error::Error for LinkError {}

// === NoteError ===

/// Errors related to note operations.
#[derive(Debug)]
pub enum NoteError {
    /// No playlist is currently selected.
    NoActivePlaylist,
    /// The provided link index is out of bounds.
    InvalidLinkIndex(usize),
    /// The provided note index is out of bounds.
    InvalidNoteIndex(usize),
    /// Persisting the library failed.
    Storage(String),
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteError::NoActivePlaylist => write!(f, "No playlist is selected"),
            NoteError::InvalidLinkIndex(index) => write!(f, "Invalid link index: {}", index),
            NoteError::InvalidNoteIndex(index) => write!(f, "Invalid note index: {}", index),
            NoteError::Storage(msg) => write!(f, "Note storage error: {}", msg),
        }
    }
}

impl std::error::Error for NoteError {}

// === StorageError ===

/// Errors related to the persistence layer.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize the stored record.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === MetadataError ===

/// Errors related to the external metadata lookup.
#[derive(Debug)]
pub enum MetadataError {
    /// A network error occurred while contacting the lookup endpoint.
    NetworkError(String),
    /// The endpoint returned a non-success status code.
    HttpStatus(u16),
    /// The endpoint returned a body that could not be parsed.
    ParseError(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::NetworkError(msg) => write!(f, "Metadata network error: {}", msg),
            MetadataError::HttpStatus(status) => {
                write!(f, "Metadata endpoint returned status {}", status)
            }
            MetadataError::ParseError(msg) => write!(f, "Metadata parse error: {}", msg),
        }
    }
}

impl std::error::Error for MetadataError {}
