use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{
    APP_DIR_NAME, CASCADE_FILE_NAME, CASCADE_SUBDIR, SYSTEM_CASCADE_DIRS,
};

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("cascade file not found; searched: {}", join_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(no candidates)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where the cascade definition comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum CascadeSource {
    /// A single user-supplied file; no fallback search.
    Explicit(PathBuf),
    /// The default candidate list from [`default_candidates`].
    Search,
}

impl CascadeSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(CascadeSource::Search, CascadeSource::Explicit)
    }

    pub fn candidates(&self) -> Vec<PathBuf> {
        match self {
            CascadeSource::Explicit(path) => vec![path.clone()],
            CascadeSource::Search => default_candidates(),
        }
    }
}

/// Return the first candidate that exists as a regular file.
///
/// Candidates are checked strictly in order; nothing is created or
/// downloaded.
pub fn resolve(candidates: &[PathBuf]) -> Result<PathBuf, CascadeResolveError> {
    for candidate in candidates {
        if candidate.is_file() {
            log::info!("Using cascade {}", candidate.display());
            return Ok(candidate.clone());
        }
        log::debug!("Cascade candidate missing: {}", candidate.display());
    }
    Err(CascadeResolveError::NotFound {
        searched: candidates.to_vec(),
    })
}

/// Default search order for the frontal-face cascade.
///
/// 1. Bundled data directory (`<data_dir>/face-detect/haarcascades/`)
/// 2. Next to the running executable (`haarcascades/` subdir, then the dir itself)
/// 3. System-wide OpenCV installs
pub fn default_candidates() -> Vec<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidates_for(CASCADE_FILE_NAME, dirs::data_dir().as_deref(), exe_dir.as_deref())
}

pub fn candidates_for(name: &str, data_dir: Option<&Path>, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = data_dir {
        candidates.push(dir.join(APP_DIR_NAME).join(CASCADE_SUBDIR).join(name));
    }
    if let Some(dir) = exe_dir {
        candidates.push(dir.join(CASCADE_SUBDIR).join(name));
        candidates.push(dir.join(name));
    }
    candidates.extend(SYSTEM_CASCADE_DIRS.iter().map(|dir| Path::new(dir).join(name)));
    candidates
}
