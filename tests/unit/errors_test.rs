use linkdeck::types::errors::*;

// === PlaylistError Tests ===

#[test]
fn playlist_error_empty_name_display() {
    let err = PlaylistError::EmptyName;
    assert_eq!(err.to_string(), "Playlist name cannot be empty");
}

#[test]
fn playlist_error_reserved_name_display() {
    let err = PlaylistError::ReservedName("Recycle Bin".to_string());
    assert_eq!(err.to_string(), "\"Recycle Bin\" is a reserved playlist name");
}

#[test]
fn playlist_error_duplicate_name_display() {
    let err = PlaylistError::DuplicateName("Reading".to_string());
    assert_eq!(err.to_string(), "A playlist named \"Reading\" already exists");
}

#[test]
fn playlist_error_invalid_index_display() {
    let err = PlaylistError::InvalidIndex(42);
    assert_eq!(err.to_string(), "Invalid playlist index: 42");
}

#[test]
fn playlist_error_system_playlist_display() {
    let err = PlaylistError::SystemPlaylist("Deleted Notes".to_string());
    assert_eq!(err.to_string(), "The \"Deleted Notes\" playlist cannot be modified");
}

#[test]
fn playlist_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(PlaylistError::EmptyName);
    assert!(err.source().is_none());
}

// === LinkError Tests ===

#[test]
fn link_error_display_variants() {
    assert_eq!(
        LinkError::NoActivePlaylist.to_string(),
        "No playlist is selected"
    );
    assert_eq!(
        LinkError::InvalidUrl("not a url".to_string()).to_string(),
        "Invalid URL: not a url"
    );
    assert_eq!(
        LinkError::DuplicateUrl("https://example.com".to_string()).to_string(),
        "This link already exists in the current playlist: https://example.com"
    );
    assert_eq!(
        LinkError::InvalidIndex(7).to_string(),
        "Invalid link index: 7"
    );
    assert_eq!(
        LinkError::NotInSystemPlaylist.to_string(),
        "Only links in the Recycle Bin or Deleted Notes can be restored"
    );
    assert_eq!(
        LinkError::Storage("disk full".to_string()).to_string(),
        "Link storage error: disk full"
    );
}

#[test]
fn link_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(LinkError::NoActivePlaylist);
    assert!(err.source().is_none());
}

// === NoteError Tests ===

#[test]
fn note_error_display_variants() {
    assert_eq!(
        NoteError::NoActivePlaylist.to_string(),
        "No playlist is selected"
    );
    assert_eq!(
        NoteError::InvalidLinkIndex(3).to_string(),
        "Invalid link index: 3"
    );
    assert_eq!(
        NoteError::InvalidNoteIndex(9).to_string(),
        "Invalid note index: 9"
    );
    assert_eq!(
        NoteError::Storage("locked".to_string()).to_string(),
        "Note storage error: locked"
    );
}

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::DatabaseError("no such table".to_string()).to_string(),
        "Storage database error: no such table"
    );
    assert_eq!(
        StorageError::SerializationError("expected array".to_string()).to_string(),
        "Storage serialization error: expected array"
    );
}

#[test]
fn storage_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(StorageError::DatabaseError("oops".to_string()));
    assert!(err.source().is_none());
}

// === MetadataError Tests ===

#[test]
fn metadata_error_display_variants() {
    assert_eq!(
        MetadataError::NetworkError("timed out".to_string()).to_string(),
        "Metadata network error: timed out"
    );
    assert_eq!(
        MetadataError::HttpStatus(503).to_string(),
        "Metadata endpoint returned status 503"
    );
    assert_eq!(
        MetadataError::ParseError("invalid json".to_string()).to_string(),
        "Metadata parse error: invalid json"
    );
}
