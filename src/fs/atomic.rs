//! Atomic writes for generated files.
//!
//! Content is written to a temporary file next to the target, synced to disk,
//! and renamed over the target. A failed run therefore never leaves a
//! truncated `.env` behind, and an existing file is only replaced once the
//! new content is complete.
//!
//! On Unix the temporary file is created with the requested mode before any
//! content is written, so secrets are never readable by other users, not even
//! briefly.
//!
//! On crash a temporary file named `.{filename}.tmp` may remain in the target
//! directory.

use crate::error::{EnvgenError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File mode for generated files that contain secrets.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// Atomically write `content` to `path` with the given Unix `mode`.
///
/// Missing parent directories are created. `mode` is ignored on platforms
/// without Unix permissions.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8], mode: u32) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            EnvgenError::UserError(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
        tracing::debug!(dir = %parent.display(), "created output directory");
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content, mode)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file readable only by its owner.
pub fn write_secret_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes(), SECRET_FILE_MODE)
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            EnvgenError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8], mode: u32) -> Result<()> {
    let mut file = open_with_mode(path, mode).map_err(|e| {
        EnvgenError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        EnvgenError::UserError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        EnvgenError::UserError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(unix)]
fn open_with_mode(path: &Path, mode: u32) -> std::io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)?;
    // A leftover temp file from a crashed run keeps its old mode; reset it.
    file.set_permissions(fs::Permissions::from_mode(mode))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_with_mode(path: &Path, _mode: u32) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Rename `source` over `target`. Replaces an existing target on all
/// supported platforms.
fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        EnvgenError::UserError(format!(
            "failed to write output file '{}': {}",
            target.display(),
            e
        ))
    })?;

    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");

        write_secret_file(&path, "KEY=value\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "KEY=value\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "OLD=1\nLONGER=content\n").unwrap();

        write_secret_file(&path, "NEW=2").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW=2");
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config").join("dev").join(".env");

        write_secret_file(&path, "KEY=value").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");

        write_secret_file(&path, "KEY=value").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from(".env")]);
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = generate_temp_path(Path::new("out/.env")).unwrap();
        assert_eq!(temp, Path::new("out/..env.tmp"));
    }

    #[cfg(unix)]
    #[test]
    fn test_secret_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "OLD=1").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_secret_file(&path, "KEY=value").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
