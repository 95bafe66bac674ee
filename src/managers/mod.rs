// linkdeck state managers
// Managers implement the operations on the shared link library: playlists,
// links, and notes. Each is constructed on demand around a mutable borrow of
// the library, one per request at the frontend boundary.

pub mod link_manager;
pub mod note_manager;
pub mod playlist_manager;
