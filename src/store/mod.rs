// linkdeck library store
// Holds the in-memory playlist collection and its single-record persistence.

pub mod library;

pub use library::LinkLibrary;
