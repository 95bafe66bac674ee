//! Unit tests for the library store: single-record persistence, legacy-shape
//! migration, system-playlist guarantees, and active-index maintenance.

use linkdeck::database::Database;
use linkdeck::store::library::{LinkLibrary, STORAGE_KEY};
use linkdeck::types::playlist::{Link, Playlist, SystemPlaylist};

fn setup() -> Database {
    Database::open_in_memory().expect("open in-memory database")
}

/// Writes a raw JSON record under the storage key, bypassing the typed layer,
/// to simulate data persisted by older versions.
fn write_raw_record(db: &Database, record: &str) {
    db.connection()
        .execute(
            "INSERT OR REPLACE INTO storage (key, value, updated_at) VALUES (?1, ?2, 0)",
            rusqlite::params![STORAGE_KEY, record],
        )
        .expect("write raw record");
}

// ─── First load ───

/// An empty store initializes to exactly the two system playlists, both empty.
#[test]
fn test_first_load_creates_both_system_playlists() {
    let db = setup();
    let library = LinkLibrary::load(&db).expect("load");

    assert_eq!(library.len(), 2);
    let names: Vec<&str> = library.playlists().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Recycle Bin", "Deleted Notes"]);
    assert!(library.playlists().iter().all(|p| p.links.is_empty()));
    assert_eq!(library.active_index(), None);
}

/// Loading again must not duplicate the system playlists.
#[test]
fn test_reload_keeps_exactly_one_of_each_system_playlist() {
    let db = setup();
    let _first = LinkLibrary::load(&db).expect("first load");
    let second = LinkLibrary::load(&db).expect("second load");

    let bins = second
        .playlists()
        .iter()
        .filter(|p| p.name == "Recycle Bin")
        .count();
    let deleted = second
        .playlists()
        .iter()
        .filter(|p| p.name == "Deleted Notes")
        .count();
    assert_eq!((bins, deleted), (1, 1));
}

/// The lazily created system playlists are persisted immediately, so the
/// stored record already contains them.
#[test]
fn test_first_load_persists_system_playlists() {
    let db = setup();
    let _library = LinkLibrary::load(&db).expect("load");

    let stored: String = db
        .connection()
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            rusqlite::params![STORAGE_KEY],
            |row| row.get(0),
        )
        .expect("stored record");
    assert!(stored.contains("Recycle Bin"));
    assert!(stored.contains("Deleted Notes"));
}

// ─── Round trip ───

/// Saving then loading yields an identical ordered structure.
#[test]
fn test_save_load_roundtrip_preserves_structure() {
    let db = setup();
    let mut library = LinkLibrary::load(&db).expect("load");

    let mut playlist = Playlist::new("Reading");
    let mut link = Link::new("https://example.com", "Example", "A site", "");
    link.notes.push(linkdeck::types::playlist::Note::new("first note"));
    link.notes.push(linkdeck::types::playlist::Note::new("second note"));
    playlist.links.push(link);
    library.push_playlist(playlist);
    library.save(&db).expect("save");

    let reloaded = LinkLibrary::load(&db).expect("reload");
    assert_eq!(reloaded.playlists(), library.playlists());
}

/// Provenance fields survive the round trip for links parked in the bin.
#[test]
fn test_roundtrip_preserves_provenance() {
    let db = setup();
    let mut library = LinkLibrary::load(&db).expect("load");

    let mut link = Link::new("https://example.com/x", "X", "", "");
    link.original_playlist_name = Some("Old Playlist".to_string());
    library
        .system_playlist_mut(SystemPlaylist::RecycleBin)
        .links
        .push(link);
    library.save(&db).expect("save");

    let reloaded = LinkLibrary::load(&db).expect("reload");
    let bin_index = reloaded.position_by_name("Recycle Bin").expect("bin");
    let stored = &reloaded.playlist(bin_index).unwrap().links[0];
    assert_eq!(
        stored.original_playlist_name.as_deref(),
        Some("Old Playlist")
    );
}

// ─── Legacy migration ───

/// The oldest records stored links as bare URL strings; they load as full
/// records with the URL doubling as title.
#[test]
fn test_load_migrates_string_links() {
    let db = setup();
    write_raw_record(
        &db,
        r#"[{"name":"Old","links":["https://example.com","https://old.net"]}]"#,
    );

    let library = LinkLibrary::load(&db).expect("load");
    let old = library.position_by_name("Old").expect("Old playlist");
    let links = &library.playlist(old).unwrap().links;

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].url, "https://example.com");
    assert_eq!(links[0].title, "https://example.com");
    assert_eq!(links[0].description, "");
    assert_eq!(links[0].image, "");
    assert!(links[0].notes.is_empty());
}

/// A legacy scalar `notes` field becomes a single note when non-empty.
#[test]
fn test_load_migrates_scalar_notes() {
    let db = setup();
    write_raw_record(
        &db,
        r#"[{"name":"Old","links":[{"url":"https://a.com","title":"A","description":"","image":"","notes":"remember this"}]}]"#,
    );

    let library = LinkLibrary::load(&db).expect("load");
    let old = library.position_by_name("Old").expect("Old playlist");
    let notes = &library.playlist(old).unwrap().links[0].notes;

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].text, "remember this");
}

/// An empty scalar `notes` field becomes an empty list, not a single empty note.
#[test]
fn test_load_migrates_empty_scalar_notes_to_empty_list() {
    let db = setup();
    write_raw_record(
        &db,
        r#"[{"name":"Old","links":[{"url":"https://a.com","title":"A","description":"","image":"","notes":""}]}]"#,
    );

    let library = LinkLibrary::load(&db).expect("load");
    let old = library.position_by_name("Old").expect("Old playlist");
    assert!(library.playlist(old).unwrap().links[0].notes.is_empty());
}

/// Any non-array `notes` value is reset to an empty list.
#[test]
fn test_load_resets_non_array_notes() {
    let db = setup();
    write_raw_record(
        &db,
        r#"[{"name":"Old","links":[{"url":"https://a.com","title":"A","description":"","image":"","notes":42}]}]"#,
    );

    let library = LinkLibrary::load(&db).expect("load");
    let old = library.position_by_name("Old").expect("Old playlist");
    assert!(library.playlist(old).unwrap().links[0].notes.is_empty());
}

/// A record that already contains a system playlist is not given a second one.
#[test]
fn test_load_does_not_duplicate_existing_system_playlists() {
    let db = setup();
    write_raw_record(
        &db,
        r#"[{"name":"Recycle Bin","links":[]},{"name":"Mine","links":[]}]"#,
    );

    let library = LinkLibrary::load(&db).expect("load");
    let bins = library
        .playlists()
        .iter()
        .filter(|p| p.name == "Recycle Bin")
        .count();
    assert_eq!(bins, 1);
    // The missing Deleted Notes playlist is appended.
    assert!(library.position_by_name("Deleted Notes").is_some());
}

// ─── Active-index maintenance ───

#[test]
fn test_remove_playlist_clears_active_when_it_pointed_at_removed() {
    let db = setup();
    let mut library = LinkLibrary::load(&db).expect("load");
    let index = library.push_playlist(Playlist::new("A"));
    library.set_active(Some(index));

    library.remove_playlist(index);
    assert_eq!(library.active_index(), None);
}

#[test]
fn test_remove_playlist_shifts_active_when_it_pointed_past_removed() {
    let db = setup();
    let mut library = LinkLibrary::load(&db).expect("load");
    let a = library.push_playlist(Playlist::new("A"));
    let b = library.push_playlist(Playlist::new("B"));
    library.set_active(Some(b));

    library.remove_playlist(a);
    let active = library.active_index().expect("active");
    assert_eq!(library.playlist(active).unwrap().name, "B");
}

#[test]
fn test_remove_playlist_keeps_active_when_it_pointed_before_removed() {
    let db = setup();
    let mut library = LinkLibrary::load(&db).expect("load");
    let a = library.push_playlist(Playlist::new("A"));
    let b = library.push_playlist(Playlist::new("B"));
    library.set_active(Some(a));

    library.remove_playlist(b);
    let active = library.active_index().expect("active");
    assert_eq!(library.playlist(active).unwrap().name, "A");
}

#[test]
fn test_move_playlist_remaps_active_to_follow_moved_element() {
    let db = setup();
    let mut library = LinkLibrary::load(&db).expect("load");
    let a = library.push_playlist(Playlist::new("A"));
    let _b = library.push_playlist(Playlist::new("B"));
    library.set_active(Some(a));

    // Move A to the front, past the system playlists.
    library.move_playlist(a, 0);
    let active = library.active_index().expect("active");
    assert_eq!(library.playlist(active).unwrap().name, "A");
}

#[test]
fn test_move_playlist_remaps_active_for_displaced_neighbors() {
    let db = setup();
    let mut library = LinkLibrary::load(&db).expect("load");
    let a = library.push_playlist(Playlist::new("A"));
    let b = library.push_playlist(Playlist::new("B"));
    let c = library.push_playlist(Playlist::new("C"));
    library.set_active(Some(b));

    // Moving A past C shifts B left by one; the selection must follow B.
    library.move_playlist(a, c);
    let active = library.active_index().expect("active");
    assert_eq!(library.playlist(active).unwrap().name, "B");
}

// ─── System playlist access ───

#[test]
fn test_system_playlist_mut_creates_lazily() {
    let mut library = LinkLibrary::new();
    assert!(library.is_empty());

    let bin = library.system_playlist_mut(SystemPlaylist::RecycleBin);
    assert_eq!(bin.name, "Recycle Bin");
    assert_eq!(library.len(), 1);

    // Second access reuses the existing playlist.
    let _bin = library.system_playlist_mut(SystemPlaylist::RecycleBin);
    assert_eq!(library.len(), 1);
}
