//! Asset validation rule configuration.

use serde::{Deserialize, Serialize};

/// 20 MiB, the largest asset the migration pipeline streams.
const DEFAULT_MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Limits applied by the asset validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Assets larger than this are tagged `FILE_TOO_LARGE`.
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
    /// Filenames longer than this (in UTF-16 code units) are tagged `FILENAME_TOO_LONG`.
    #[serde(default = "default_max_filename_length")]
    pub max_filename_length: usize,
    /// Number of metadata probes allowed in flight at once.
    #[serde(default = "default_probe_concurrency")]
    pub probe_concurrency: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            max_filename_length: default_max_filename_length(),
            probe_concurrency: default_probe_concurrency(),
        }
    }
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

fn default_max_filename_length() -> usize {
    100
}

fn default_probe_concurrency() -> usize {
    4
}
