//! App Core for linkdeck.
//!
//! Central struct holding the database, the loaded library, and the metadata
//! service. Loading creates the two system playlists on first run, so a
//! constructed `App` always satisfies the system-playlist invariant.

use std::sync::Arc;

use crate::database::Database;
use crate::services::metadata_service::{
    HttpMetadataService, MetadataServiceTrait, StaticMetadataService,
};
use crate::store::library::LinkLibrary;

/// Environment variable naming the metadata endpoint base URL. When unset,
/// lookups are disabled and added links fall back to default metadata.
pub const METADATA_URL_ENV: &str = "LINKDECK_METADATA_URL";

/// Central application struct.
///
/// Managers are not stored here: they borrow the library mutably and are
/// created on demand, one per request, at the frontend boundary.
pub struct App {
    pub db: Arc<Database>,
    pub library: LinkLibrary,
    pub metadata: Box<dyn MetadataServiceTrait>,
}

impl App {
    /// Opens the database, loads the library, and wires the metadata service
    /// from the environment.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let metadata: Box<dyn MetadataServiceTrait> = match std::env::var(METADATA_URL_ENV) {
            Ok(base) => Box::new(HttpMetadataService::new(base)),
            Err(_) => Box::new(StaticMetadataService::unavailable()),
        };
        Self::with_metadata_service(db_path, metadata)
    }

    /// Like [`App::new`] but with an explicit metadata service; tests use
    /// this to substitute a deterministic stub.
    pub fn with_metadata_service(
        db_path: &str,
        metadata: Box<dyn MetadataServiceTrait>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let library = LinkLibrary::load(&db)?;
        Ok(Self {
            db,
            library,
            metadata,
        })
    }
}
