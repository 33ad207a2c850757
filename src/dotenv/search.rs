//! Upward search for the nearest `.env` file.

use std::path::{Path, PathBuf};

use crate::constants::ENV_FILENAME;

/// Find the nearest `.env` file, starting in `start_dir` and walking up
/// through each parent until the filesystem root.
///
/// The first directory containing the file wins; ancestors above it are
/// never consulted.
pub fn find_env_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(ENV_FILENAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "found env file");
            return Some(candidate);
        }
    }
    None
}
