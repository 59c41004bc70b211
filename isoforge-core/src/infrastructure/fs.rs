// isoforge-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `content` to `path` through a temporary file in the same directory,
/// then renames it into place. Readers see either the old file or the new one.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    // Same directory, so the rename never crosses a filesystem
    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Writes one line per entry to `<dir>/<file_name>`, each terminated by `\n`.
/// The directory is created on demand.
pub fn write_lines<S: AsRef<str>>(
    dir: &Path,
    file_name: &str,
    lines: &[S],
) -> Result<PathBuf, InfrastructureError> {
    std::fs::create_dir_all(dir)?;

    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut content = String::with_capacity(capacity);
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }

    let path = dir.join(file_name);
    atomic_write(&path, content)?;
    Ok(path)
}
