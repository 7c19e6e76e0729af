use std::path::{Path, PathBuf};
use tracing::warn;
use ulid::Ulid;

/// A blob written to the upload directory.
#[derive(Clone, Debug)]
pub struct StoredUpload {
    /// Path recorded on the activity record and used by the serving route.
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

/// Durable location for uploaded proof documents. Blob names are prefixed
/// with a fresh ULID so two uploads of the same file never collide.
#[derive(Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn try_new(root: impl Into<PathBuf>) -> eyre::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| eyre::eyre!("Couldn't create upload directory {root:?}: {e}"))?;
        Ok(Self { root })
    }

    /// Writes the blob and returns the path to record on the activity.
    pub fn store(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<StoredUpload> {
        let file_name = format!("{}-{}", Ulid::new(), sanitize_file_name(original_name));
        let absolute_path = self.root.join(&file_name);
        std::fs::write(&absolute_path, bytes)?;

        Ok(StoredUpload {
            relative_path: format!("uploads/{file_name}"),
            absolute_path,
        })
    }

    /// Best-effort removal, used to clean up a blob whose record never made
    /// it into the store.
    pub fn remove(&self, upload: &StoredUpload) {
        if let Err(e) = std::fs::remove_file(&upload.absolute_path) {
            warn!(
                "couldn't remove orphaned upload {:?}: {e}",
                upload.absolute_path
            );
        }
    }

    /// Maps a stored file name back to its on-disk location. Anything that
    /// isn't a plain file name is rejected.
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        if file_name.is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name == "."
            || file_name == ".."
        {
            return None;
        }

        let path = self.root.join(file_name);
        path.is_file().then_some(path)
    }
}

/// Keeps only the final path component of the browser-supplied name.
fn sanitize_file_name(original_name: &str) -> String {
    let name = Path::new(original_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    if name.is_empty() || name == "." || name == ".." {
        "upload.pdf".to_string()
    } else {
        name.to_string()
    }
}
