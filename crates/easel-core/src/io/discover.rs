use std::path::{Path, PathBuf};

use crate::error::{EaselError, Result};

/// List the regular files directly inside `dir`.
///
/// No recursion and no extension filtering: anything that is not an
/// image surfaces as a decode failure downstream rather than being
/// silently skipped. Entries are sorted lexicographically so the
/// reference frame and all reports are stable across platforms.
pub fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(EaselError::SourceDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    Ok(files)
}
