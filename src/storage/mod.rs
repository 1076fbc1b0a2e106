//! Durable storage: uploaded files on disk, member records in SQLite.

pub mod files;
pub mod members;

pub use files::FileStore;
pub use members::{MemberRecord, MemberStore, StoreError};
