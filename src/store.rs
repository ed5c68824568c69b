//! Session persistence - one JSON blob under a well-known key
//!
//! The whole session (queries, catalog, records) serializes as a single
//! document. Load failures are non-fatal and read as "no prior session".

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SpecwiseError};
use crate::session::ComparisonSession;

/// Well-known key for the persisted session
pub const SESSION_FILE: &str = "session.json";

/// Location of the persisted session in the platform data directory
pub fn session_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "specwise").ok_or_else(|| {
        SpecwiseError::NoSession("could not determine a data directory".to_string())
    })?;
    Ok(dirs.data_dir().join(SESSION_FILE))
}

pub fn save(session: &ComparisonSession) -> Result<()> {
    save_to(session, &session_path()?)
}

pub fn save_to(session: &ComparisonSession, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load the prior session, if one exists and parses. Any failure is "none".
pub fn load() -> Option<ComparisonSession> {
    session_path().ok().and_then(|path| load_from(&path))
}

pub fn load_from(path: &Path) -> Option<ComparisonSession> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Delete the persisted session; absent is fine
pub fn clear() -> Result<()> {
    let path = session_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
