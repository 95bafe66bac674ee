//! linkdeck database layer.
//!
//! Provides SQLite connection management and schema migrations. The schema is
//! a single key-value `storage` table: the Rust analog of the browser
//! key-value store the original frontend persisted into, holding one
//! serialized record per key.
//!
//! # Usage
//!
//! ```no_run
//! use linkdeck::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("linkdeck.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
