//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides platform utilities that the storage layer depends on,
//! currently the resolution of the application data directory.

pub mod paths;

pub use paths::{data_dir, DATA_DIR_ENV};
