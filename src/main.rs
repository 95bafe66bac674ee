//! linkdeck — a link playlist organizer with soft-delete and restore.
//!
//! Entry point: runs an interactive-free console walkthrough of the core
//! components against an in-memory database. The real frontend talks to the
//! `linkdeck-rpc` binary instead.

use linkdeck::database::Database;
use linkdeck::managers::link_manager::{LinkManager, LinkManagerTrait};
use linkdeck::managers::note_manager::{NoteManager, NoteManagerTrait};
use linkdeck::managers::playlist_manager::{PlaylistManager, PlaylistManagerTrait};
use linkdeck::services::metadata_service::StaticMetadataService;
use linkdeck::services::prompt_service::StaticPrompt;
use linkdeck::store::library::LinkLibrary;
use linkdeck::types::metadata::LinkMetadata;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 linkdeck v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║     Link playlists with soft-delete, restore, and notes    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_playlist_store();
    demo_link_operations();
    demo_recycle_bin();
    demo_notes();
    demo_persistence();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  All components demonstrated. Run linkdeck-rpc for a frontend.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use linkdeck::database::migrations;
    section("Database Layer");

    let db = Database::open_in_memory().expect("in-memory database");
    println!(
        "  ✓ Opened in-memory database (schema v{})",
        migrations::get_schema_version(db.connection())
    );
}

fn demo_playlist_store() {
    section("Playlist Store");

    let db = Database::open_in_memory().expect("in-memory database");
    let mut library = LinkLibrary::load(&db).expect("load library");
    println!(
        "  ✓ Fresh library starts with {} system playlists",
        library.len()
    );

    let prompt = StaticPrompt::approving();
    let mut mgr = PlaylistManager::new(&mut library, &db, &prompt);
    mgr.create_playlist("Reading List").expect("create");
    mgr.create_playlist("Rust Crates").expect("create");
    println!("  ✓ Created 2 user playlists");

    match mgr.create_playlist("Recycle Bin") {
        Err(e) => println!("  ✓ Reserved name rejected: {}", e),
        Ok(_) => println!("  ✗ Reserved name accepted"),
    }

    mgr.reorder_playlist(3, 2).expect("reorder");
    println!(
        "  ✓ Reordered: {:?}",
        library
            .playlists()
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
    );
}

fn demo_link_operations() {
    section("Link Operations");

    let db = Database::open_in_memory().expect("in-memory database");
    let mut library = LinkLibrary::load(&db).expect("load library");
    let prompt = StaticPrompt::approving();
    let metadata = StaticMetadataService::with(LinkMetadata {
        title: Some("The Rust Programming Language".to_string()),
        image: None,
        description: Some("A language empowering everyone".to_string()),
    });

    let mut playlists = PlaylistManager::new(&mut library, &db, &prompt);
    playlists.create_playlist("Reading List").expect("create");

    let mut links = LinkManager::new(&mut library, &db, &metadata, &prompt);
    links.add_link("https://www.rust-lang.org").expect("add");
    links.add_link("example.com").expect("add bare host");
    println!("  ✓ Added 2 links (bare host got http:// prepended)");

    match links.add_link("https://www.rust-lang.org") {
        Err(e) => println!("  ✓ Duplicate rejected: {}", e),
        Ok(_) => println!("  ✗ Duplicate accepted"),
    }

    if let Some(playlist) = library.active_playlist() {
        for link in &playlist.links {
            println!("    - {} ({})", link.title, link.url);
        }
    }
}

fn demo_recycle_bin() {
    section("Recycle Bin");

    let db = Database::open_in_memory().expect("in-memory database");
    let mut library = LinkLibrary::load(&db).expect("load library");
    let prompt = StaticPrompt::approving();
    let metadata = StaticMetadataService::unavailable();

    let mut playlists = PlaylistManager::new(&mut library, &db, &prompt);
    playlists.create_playlist("Videos").expect("create");
    let mut links = LinkManager::new(&mut library, &db, &metadata, &prompt);
    links.add_link("https://example.com/a").expect("add");
    links.add_link("https://example.com/b").expect("add");

    let outcome = links.delete_link(0).expect("delete");
    println!("  ✓ Soft-deleted a link: {:?}", outcome);

    let videos = library.position_by_name("Videos").expect("videos index");
    let mut playlists = PlaylistManager::new(&mut library, &db, &prompt);
    let outcome = playlists.delete_playlist(videos).expect("delete playlist");
    println!("  ✓ Deleted the playlist, links cascaded: {:?}", outcome);

    let bin = library.position_by_name("Recycle Bin").expect("bin index");
    let mut playlists = PlaylistManager::new(&mut library, &db, &prompt);
    playlists.select_playlist(bin).expect("select bin");
    let mut links = LinkManager::new(&mut library, &db, &metadata, &prompt);
    let outcome = links.restore_link(0).expect("restore");
    println!("  ✓ Restored from the bin: {:?}", outcome);
}

fn demo_notes() {
    section("Notes & Deleted Notes");

    let db = Database::open_in_memory().expect("in-memory database");
    let mut library = LinkLibrary::load(&db).expect("load library");
    let prompt = StaticPrompt::approving();
    let metadata = StaticMetadataService::unavailable();

    let mut playlists = PlaylistManager::new(&mut library, &db, &prompt);
    playlists.create_playlist("Papers").expect("create");
    let mut links = LinkManager::new(&mut library, &db, &metadata, &prompt);
    links.add_link("https://example.com/paper").expect("add");

    let mut notes = NoteManager::new(&mut library, &db, &prompt);
    let note = notes.add_note(0).expect("add note");
    notes.edit_note(0, note, "Read section 3 again").expect("edit");
    println!("  ✓ Added and edited a note");

    let outcome = notes.delete_note(0, note).expect("delete note");
    println!("  ✓ Deleted the note: {:?}", outcome);

    let deleted = library
        .position_by_name("Deleted Notes")
        .expect("deleted notes index");
    let mut playlists = PlaylistManager::new(&mut library, &db, &prompt);
    playlists.select_playlist(deleted).expect("select");
    let mut links = LinkManager::new(&mut library, &db, &metadata, &prompt);
    let outcome = links.restore_link(0).expect("restore note");
    println!("  ✓ Restored the note onto its link: {:?}", outcome);
}

fn demo_persistence() {
    section("Persistence");

    let db = Database::open_in_memory().expect("in-memory database");
    {
        let mut library = LinkLibrary::load(&db).expect("load library");
        let prompt = StaticPrompt::approving();
        let metadata = StaticMetadataService::unavailable();
        let mut playlists = PlaylistManager::new(&mut library, &db, &prompt);
        playlists.create_playlist("Saved").expect("create");
        let mut links = LinkManager::new(&mut library, &db, &metadata, &prompt);
        links.add_link("https://example.com").expect("add");
    }

    let reloaded = LinkLibrary::load(&db).expect("reload");
    println!(
        "  ✓ Reloaded {} playlists from one stored record",
        reloaded.len()
    );
    for playlist in reloaded.playlists() {
        println!("    - {} ({} links)", playlist.name, playlist.links.len());
    }
}
