//! Unit tests for the linkdeck database layer (connection + migrations).

use linkdeck::database::Database;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_storage_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    let exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='storage'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "Table 'storage' should exist after migrations");
}

#[test]
fn test_migrations_record_schema_version() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let version = linkdeck::database::migrations::get_schema_version(db.connection());
    assert_eq!(
        version,
        linkdeck::database::migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    // Running migrations a second time should not fail
    let result = linkdeck::database::migrations::run_all(db.connection());
    assert!(result.is_ok(), "Migrations should be idempotent");
}

#[test]
fn test_storage_insert_or_replace_keeps_one_row_per_key() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    conn.execute(
        "INSERT OR REPLACE INTO storage (key, value, updated_at) VALUES ('k', 'first', 1)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT OR REPLACE INTO storage (key, value, updated_at) VALUES ('k', 'second', 2)",
        [],
    )
    .unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM storage WHERE key = 'k'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 1, "A key should hold exactly one record");

    let value: String = conn
        .query_row("SELECT value FROM storage WHERE key = 'k'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(value, "second", "The latest value should win");
}

#[test]
fn test_open_on_disk_creates_file() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("linkdeck.db");

    {
        let _db = Database::open(&path).expect("open on disk");
    }
    assert!(path.exists(), "Database file should be created on open");
}
