//! Output file writing
//!
//! Resolves each app's `output-file` to a concrete path and writes
//! atomically: sibling temp file, then rename. An interrupted run never
//! leaves a partially written output behind.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::paths;

/// Resolve an app's `output-file` setting
///
/// Values containing a path separator or starting with `~` are absolute
/// (after tilde and environment expansion); bare filenames land under
/// `$XDG_CACHE_HOME/luminol/<app>/`.
#[must_use]
pub fn resolve_output_path(app_name: &str, output_file: &str) -> PathBuf {
    if output_file.contains(std::path::MAIN_SEPARATOR) || output_file.starts_with('~') {
        paths::expand(output_file)
    } else {
        paths::cache_dir().join(app_name).join(output_file)
    }
}

/// Write `content` to `path` atomically, creating parent directories
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let temp = sibling_temp(path);
    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, path)?;
    Ok(())
}

fn sibling_temp(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(
        || std::ffi::OsString::from("output"),
        std::ffi::OsStr::to_os_string,
    );
    name.push(".tmp");
    path.with_file_name(name)
}
