//! Shared utility functions used across multiple modules.

use std::path::{Path, PathBuf};

/// Treat an empty string like a missing value.
///
/// Whitespace is kept as-is since directory names may legitimately contain it.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Drop empty paths so `GOPATH=""` behaves like an unset variable.
pub fn normalize_path_option(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|path| !path.as_os_str().is_empty())
}

/// Lower-cased base name of a path, if it has one.
pub fn lowercase_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
}
