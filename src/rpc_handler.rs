//! RPC method handler for the linkdeck JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! appropriate managers via the `App` struct.
//!
//! Destructive methods carry a `confirm` parameter: the frontend runs the
//! blocking modal dialog itself and forwards the user's answer. A missing or
//! false `confirm` behaves like a declined prompt, so the operation reports
//! `cancelled` and no state changes.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::link_manager::{LinkManager, LinkManagerTrait};
use crate::managers::note_manager::{NoteManager, NoteManagerTrait};
use crate::managers::playlist_manager::{PlaylistManager, PlaylistManagerTrait};
use crate::services::prompt_service::StaticPrompt;
use crate::types::outcome::{DeleteOutcome, PlaylistDeleteOutcome, RenameOutcome, RestoreOutcome};
use crate::types::playlist::{Link, Playlist};

fn str_param<'p>(params: &'p Value, key: &str) -> Result<&'p str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn usize_param(params: &Value, key: &str) -> Result<usize, String> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .map(|v| v as usize)
        .ok_or_else(|| format!("missing {}", key))
}

fn confirm_prompt(params: &Value) -> StaticPrompt {
    if params
        .get("confirm")
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
    {
        StaticPrompt::approving()
    } else {
        StaticPrompt::declining()
    }
}

fn playlist_json(playlist: &Playlist, active: bool) -> Value {
    json!({
        "name": playlist.name,
        "linkCount": playlist.links.len(),
        "system": playlist.is_system(),
        "active": active,
    })
}

fn link_json(link: &Link) -> Value {
    json!({
        "url": link.url,
        "title": link.title,
        "description": link.description,
        "image": link.image,
        "notes": link.notes.iter().map(|n| json!({"text": n.text})).collect::<Vec<_>>(),
        "originalPlaylistName": link.original_playlist_name,
        "isDeletedNote": link.is_deleted_note,
    })
}

fn delete_outcome_json(outcome: &DeleteOutcome) -> Value {
    let label = match outcome {
        DeleteOutcome::Cancelled => "cancelled",
        DeleteOutcome::MovedToRecycleBin => "movedToRecycleBin",
        DeleteOutcome::DroppedDuplicate => "droppedDuplicate",
        DeleteOutcome::PermanentlyDeleted => "permanentlyDeleted",
        DeleteOutcome::MovedToDeletedNotes => "movedToDeletedNotes",
    };
    json!({ "outcome": label })
}

fn restore_outcome_json(outcome: &RestoreOutcome) -> Value {
    match outcome {
        RestoreOutcome::NoteReattached { playlist, link_url } => {
            json!({"outcome": "noteReattached", "playlist": playlist, "linkUrl": link_url})
        }
        RestoreOutcome::Restored { playlist } => {
            json!({"outcome": "restored", "playlist": playlist})
        }
        RestoreOutcome::RestoredToRecreated { playlist } => {
            json!({"outcome": "restoredToRecreated", "playlist": playlist})
        }
        RestoreOutcome::RestoredToFallback { playlist } => {
            json!({"outcome": "restoredToFallback", "playlist": playlist})
        }
        RestoreOutcome::DuplicateSkipped { playlist } => {
            json!({"outcome": "duplicateSkipped", "playlist": playlist})
        }
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── State ───
        "state.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let active = a.library.active_index();
            let playlists: Vec<Value> = a
                .library
                .playlists()
                .iter()
                .enumerate()
                .map(|(i, p)| playlist_json(p, active == Some(i)))
                .collect();
            let links: Vec<Value> = a
                .library
                .active_playlist()
                .map(|p| p.links.iter().map(link_json).collect())
                .unwrap_or_default();
            Ok(json!({"playlists": playlists, "activeIndex": active, "links": links}))
        }

        // ─── Playlists ───
        "playlist.create" => {
            let name = str_param(params, "name")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr = PlaylistManager::new(&mut a.library, &a.db, &prompt);
            let index = mgr.create_playlist(name).map_err(|e| e.to_string())?;
            Ok(json!({"index": index, "name": name}))
        }
        "playlist.rename" => {
            let index = usize_param(params, "index")?;
            let name = str_param(params, "name")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr = PlaylistManager::new(&mut a.library, &a.db, &prompt);
            let outcome = mgr.rename_playlist(index, name).map_err(|e| e.to_string())?;
            Ok(json!({"renamed": outcome == RenameOutcome::Renamed}))
        }
        "playlist.delete" => {
            let index = usize_param(params, "index")?;
            let prompt = confirm_prompt(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let mut mgr = PlaylistManager::new(&mut a.library, &a.db, &prompt);
            let outcome = mgr.delete_playlist(index).map_err(|e| e.to_string())?;
            match outcome {
                PlaylistDeleteOutcome::Cancelled => {
                    Ok(json!({"deleted": false, "cancelled": true}))
                }
                PlaylistDeleteOutcome::Deleted {
                    moved_to_bin,
                    dropped_duplicates,
                } => Ok(json!({
                    "deleted": true,
                    "movedToBin": moved_to_bin,
                    "droppedDuplicates": dropped_duplicates,
                })),
            }
        }
        "playlist.select" => {
            let index = usize_param(params, "index")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr = PlaylistManager::new(&mut a.library, &a.db, &prompt);
            mgr.select_playlist(index).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "playlist.reorder" => {
            let from = usize_param(params, "from")?;
            let to = usize_param(params, "to")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr = PlaylistManager::new(&mut a.library, &a.db, &prompt);
            mgr.reorder_playlist(from, to).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Links ───
        "link.add" => {
            let url = str_param(params, "url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr =
                LinkManager::new(&mut a.library, &a.db, a.metadata.as_ref(), &prompt);
            let index = mgr.add_link(url).map_err(|e| e.to_string())?;
            let link = a
                .library
                .active_playlist()
                .and_then(|p| p.links.get(index))
                .map(link_json)
                .unwrap_or(Value::Null);
            Ok(json!({"index": index, "link": link}))
        }
        "link.delete" => {
            let index = usize_param(params, "index")?;
            let prompt = confirm_prompt(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let mut mgr =
                LinkManager::new(&mut a.library, &a.db, a.metadata.as_ref(), &prompt);
            let outcome = mgr.delete_link(index).map_err(|e| e.to_string())?;
            Ok(delete_outcome_json(&outcome))
        }
        "link.restore" => {
            let index = usize_param(params, "index")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr =
                LinkManager::new(&mut a.library, &a.db, a.metadata.as_ref(), &prompt);
            let outcome = mgr.restore_link(index).map_err(|e| e.to_string())?;
            Ok(restore_outcome_json(&outcome))
        }
        "link.reorder" => {
            let from = usize_param(params, "from")?;
            let to = usize_param(params, "to")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr =
                LinkManager::new(&mut a.library, &a.db, a.metadata.as_ref(), &prompt);
            mgr.reorder_links(from, to).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Notes ───
        "note.add" => {
            let link = usize_param(params, "link")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr = NoteManager::new(&mut a.library, &a.db, &prompt);
            let index = mgr.add_note(link).map_err(|e| e.to_string())?;
            Ok(json!({"index": index}))
        }
        "note.edit" => {
            let link = usize_param(params, "link")?;
            let note = usize_param(params, "note")?;
            let text = str_param(params, "text")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr = NoteManager::new(&mut a.library, &a.db, &prompt);
            mgr.edit_note(link, note, text).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "note.delete" => {
            let link = usize_param(params, "link")?;
            let note = usize_param(params, "note")?;
            let prompt = confirm_prompt(params);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let mut mgr = NoteManager::new(&mut a.library, &a.db, &prompt);
            let outcome = mgr.delete_note(link, note).map_err(|e| e.to_string())?;
            Ok(delete_outcome_json(&outcome))
        }
        "note.reorder" => {
            let link = usize_param(params, "link")?;
            let from = usize_param(params, "from")?;
            let to = usize_param(params, "to")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let prompt = StaticPrompt::declining();
            let mut mgr = NoteManager::new(&mut a.library, &a.db, &prompt);
            mgr.reorder_notes(link, from, to).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
