//! Flat-directory store for uploaded documents.
//!
//! Uploads are accepted only for a fixed extension allow-list. Accepted
//! files get a sanitized name prefixed with a random token, so two
//! uploads with the same original name never collide and stored names
//! are not guessable. Rejections are silent by contract: the wizard
//! keeps whatever reference was stored before.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// Extensions the store will accept, matched case-insensitively
/// against the text after the last dot.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "pdf"];

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9._-]+").expect("filename sanitizer regex is valid")
});

/// Handle to the uploads directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store an upload. Returns the composite stored name, or `None`
    /// when the upload is rejected (empty filename, disallowed
    /// extension) or the write fails. Failures are logged, never
    /// surfaced to the submitter.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Option<String> {
        if original_name.is_empty() || !extension_allowed(original_name) {
            tracing::debug!(name = original_name, "rejected upload");
            return None;
        }

        let safe = sanitize(original_name);
        if safe.is_empty() {
            return None;
        }

        let stored = format!("{}_{}", Uuid::new_v4().simple(), safe);
        let path = self.root.join(&stored);
        match tokio::fs::write(&path, bytes).await {
            Ok(()) => {
                tracing::info!(stored = %stored, size = bytes.len(), "stored upload");
                Some(stored)
            }
            Err(e) => {
                tracing::warn!(name = original_name, error = %e, "failed to write upload");
                None
            }
        }
    }

    /// Read back a stored file by its composite name. Names carrying
    /// path separators or parent components are refused.
    pub async fn read(&self, stored_name: &str) -> std::io::Result<Vec<u8>> {
        if !valid_stored_name(stored_name) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "invalid stored file name",
            ));
        }
        tokio::fs::read(self.root.join(stored_name)).await
    }
}

/// Whether the filename carries an allowed extension.
pub fn extension_allowed(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Reduce an original filename to a safe single path component.
fn sanitize(name: &str) -> String {
    // keep only the final component of whatever path the client sent
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    let safe = UNSAFE_CHARS.replace_all(base, "_");
    safe.trim_matches('.').trim_matches('_').to_string()
}

fn valid_stored_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
}
