//! Note operations for linkdeck.
//!
//! Every link carries an ordered list of free-text notes. Deleting a note
//! records it in the Deleted Notes playlist as a synthetic link carrying
//! provenance back to its source, so it can be reattached later.

use uuid::Uuid;

use crate::database::Database;
use crate::services::prompt_service::PromptServiceTrait;
use crate::store::library::{move_item, LinkLibrary};
use crate::types::errors::NoteError;
use crate::types::outcome::DeleteOutcome;
use crate::types::playlist::{Link, Note, SystemPlaylist};

/// Trait defining note operations.
pub trait NoteManagerTrait {
    fn add_note(&mut self, link_index: usize) -> Result<usize, NoteError>;
    fn edit_note(
        &mut self,
        link_index: usize,
        note_index: usize,
        text: &str,
    ) -> Result<(), NoteError>;
    fn delete_note(
        &mut self,
        link_index: usize,
        note_index: usize,
    ) -> Result<DeleteOutcome, NoteError>;
    fn reorder_notes(&mut self, link_index: usize, from: usize, to: usize)
        -> Result<(), NoteError>;
}

/// Note manager operating on links in the active playlist.
pub struct NoteManager<'a> {
    library: &'a mut LinkLibrary,
    db: &'a Database,
    prompt: &'a dyn PromptServiceTrait,
}

impl<'a> NoteManager<'a> {
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

    fn save(&self) -> Result<(), NoteError> {
        self.library
            .save(self.db)
            .map_err(|e| NoteError::Storage(e.to_string()))
    }

    fn active_link_mut(&mut self, link_index: usize) -> Result<&mut Link, NoteError> {
        let playlist = self
            .library
            .active_playlist_mut()
            .ok_or(NoteError::NoActivePlaylist)?;
        playlist
            .links
            .get_mut(link_index)
            .ok_or(NoteError::InvalidLinkIndex(link_index))
    }
}

impl NoteManagerTrait for NoteManager<'_> {
    /// Appends an empty note to the link, immediately editable. Returns the
    /// new note's position.
    fn add_note(&mut self, link_index: usize) -> Result<usize, NoteError> {
        let link = self.active_link_mut(link_index)?;
        link.notes.push(Note::new(""));
        let index = link.notes.len() - 1;
        self.save()?;
        Ok(index)
    }

    /// Overwrites the note text in place. Empty text is permitted.
    fn edit_note(
        &mut self,
        link_index: usize,
        note_index: usize,
        text: &str,
    ) -> Result<(), NoteError> {
        let link = self.active_link_mut(link_index)?;
        let note = link
            .notes
            .get_mut(note_index)
            .ok_or(NoteError::InvalidNoteIndex(note_index))?;
        note.text = text.trim().to_string();
        self.save()?;
        Ok(())
    }

    /// Removes the note after confirmation and records it in Deleted Notes
    /// as a synthetic link: title carries the note text, description names
    /// the source link, provenance points back to it. The synthetic URL is
    /// unique so URL uniqueness holds inside Deleted Notes.
    fn delete_note(
        &mut self,
        link_index: usize,
        note_index: usize,
    ) -> Result<DeleteOutcome, NoteError> {
        let playlist = self
            .library
            .active_playlist()
            .ok_or(NoteError::NoActivePlaylist)?;
        let playlist_name = playlist.name.clone();
        let link = playlist
            .links
            .get(link_index)
            .ok_or(NoteError::InvalidLinkIndex(link_index))?;
        if note_index >= link.notes.len() {
            return Err(NoteError::InvalidNoteIndex(note_index));
        }
        let link_title = link.title.clone();
        let link_url = link.url.clone();

        if !self
            .prompt
            .confirm("Delete this note? It will be moved to Deleted Notes.")
        {
            return Ok(DeleteOutcome::Cancelled);
        }

        let note = self.active_link_mut(link_index)?.notes.remove(note_index);

        let mut record = Link::new(
            format!("note:{}", Uuid::new_v4()),
            note.text,
            format!("Note from: {}", link_title),
            "",
        );
        record.original_playlist_name = Some(playlist_name);
        record.original_link_url = Some(link_url);
        record.is_deleted_note = true;

        self.library
            .system_playlist_mut(SystemPlaylist::DeletedNotes)
            .links
            .push(record);
        self.save()?;
        Ok(DeleteOutcome::MovedToDeletedNotes)
    }

    /// Moves a note within its link. `from == to` is a no-op.
    fn reorder_notes(
        &mut self,
        link_index: usize,
        from: usize,
        to: usize,
    ) -> Result<(), NoteError> {
        let link = self.active_link_mut(link_index)?;
        let count = link.notes.len();
        if from >= count {
            return Err(NoteError::InvalidNoteIndex(from));
        }
        if to >= count {
            return Err(NoteError::InvalidNoteIndex(to));
        }
        if from == to {
            return Ok(());
        }

        move_item(&mut link.notes, from, to);
        self.save()?;
        Ok(())
    }
}
