//! Platform path utilities for application data.
//!
//! This module resolves where the persisted credential lives. The location can
//! be overridden with the `LIFTSCAN_DATA_DIR` environment variable, which the
//! tests and containerised deployments rely on; otherwise the platform's
//! conventional data directory is used.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LIFTSCAN_DATA_DIR";

/// Returns the data directory for Liftscan storage.
///
/// Resolution order:
///
/// 1. `LIFTSCAN_DATA_DIR` environment variable, if set and non-empty
/// 2. The platform data directory (e.g. `~/.local/share/liftscan` on Linux,
///    `~/Library/Application Support/liftscan` on macOS)
/// 3. `./.liftscan` as a last resort when no home directory is known
///
/// The directory is not created here; callers create it when they first
/// write to it.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    ProjectDirs::from("", "", "liftscan").map_or_else(
        || PathBuf::from(".liftscan"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}
