//! Typed results for operations whose non-fatal notices the frontend must
//! surface to the user (the original UI reported these as alert dialogs).

/// Result of renaming a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The playlist now carries the new name.
    Renamed,
    /// Empty or identical input: the old name is kept, without an error.
    Unchanged,
}

/// Result of deleting a whole playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistDeleteOutcome {
    /// The user declined the confirmation prompt; nothing changed.
    Cancelled,
    /// The playlist was removed and its links cascaded into the Recycle Bin.
    /// Links whose URL already existed in the bin were dropped.
    Deleted {
        moved_to_bin: usize,
        dropped_duplicates: usize,
    },
}

/// Result of a confirmed link or note delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt; nothing changed.
    Cancelled,
    /// The link was moved into the Recycle Bin.
    MovedToRecycleBin,
    /// The link was removed from its playlist but not added to the bin
    /// because a link with the same URL is already there. The record is gone.
    DroppedDuplicate,
    /// Removed permanently from a system playlist.
    PermanentlyDeleted,
    /// The note was removed and recorded in Deleted Notes.
    MovedToDeletedNotes,
}

/// Result of restoring a record out of a system playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A deleted-note record was reattached to its original link as a note.
    NoteReattached { playlist: String, link_url: String },
    /// The link went back to its recorded original playlist.
    Restored { playlist: String },
    /// The original playlist no longer existed and was recreated empty first.
    RestoredToRecreated { playlist: String },
    /// No provenance was recorded; the link went to the first user playlist,
    /// or to a newly created fallback playlist when none existed.
    RestoredToFallback { playlist: String },
    /// A same-URL link already exists at the destination; the record was
    /// discarded.
    DuplicateSkipped { playlist: String },
}
