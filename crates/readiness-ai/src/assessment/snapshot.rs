use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::domain::AssessmentSnapshot;

/// Storage key shared with the browser build of the survey.
pub const SNAPSHOT_KEY: &str = "ai-readiness-finder";

/// Storage seam for the persisted form state, kept narrow so the service can
/// be exercised without touching disk.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<Option<AssessmentSnapshot>, SnapshotError>;
    fn save(&self, snapshot: &AssessmentSnapshot) -> Result<(), SnapshotError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
    #[error("snapshot malformed: {0}")]
    Malformed(String),
}

/// Single-document JSON store rooted at a directory. The file name matches
/// the browser storage key so exported documents line up.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SNAPSHOT_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<AssessmentSnapshot>, SnapshotError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SnapshotError::Unavailable(err.to_string())),
        };

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|err| SnapshotError::Malformed(err.to_string()))
    }

    fn save(&self, snapshot: &AssessmentSnapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| SnapshotError::Unavailable(err.to_string()))?;
        }

        let payload = serde_json::to_vec_pretty(snapshot)
            .map_err(|err| SnapshotError::Malformed(err.to_string()))?;
        fs::write(&self.path, payload).map_err(|err| SnapshotError::Unavailable(err.to_string()))
    }
}
