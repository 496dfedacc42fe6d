//! Media file store

pub mod paths;
mod store;

pub use store::{MediaStore, StorageError};
