//! # commune-storage
//!
//! Media storage layer persisting uploaded image files under a configured
//! media root. Paths are deterministic per record and field, so the
//! database row is the single source of truth for which file exists.

pub mod media;

pub use media::{paths, MediaStore, StorageError};
