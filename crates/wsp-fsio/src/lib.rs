use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use wsp_error::{Result, WspError};

/// Options for [`Fs::copy_tree`].
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Allow the destination to already exist.
    pub overwrite: bool,
    /// File or directory names skipped at any depth.
    pub exclude: Vec<String>,
}

/// Filesystem capability handed to everything that mutates the workspace.
///
/// The dry-run flag is carried here, not in process-global state, so a test
/// can drive several simulated workspaces with different settings in one
/// process. Every mutation is logged the same way in dry-run and real mode;
/// in dry-run mode nothing reaches the disk. Reads are always real.
#[derive(Debug, Clone, Copy)]
pub struct Fs {
    dry_run: bool,
}

impl Fs {
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn log_mutation(&self, message: &str) {
        if self.dry_run {
            wsp_logger::info(&format!("[dry-run] {message}"));
        } else {
            wsp_logger::info(message);
        }
    }

    #[must_use]
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[must_use]
    pub fn is_symlink(&self, path: &Path) -> bool {
        path.symlink_metadata()
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    }

    /// Directory entries in filesystem enumeration order (not sorted).
    pub fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path).map_err(|_| missing(path))?;
        let mut result = Vec::new();
        for entry in entries {
            result.push(entry?.path());
        }
        Ok(result)
    }

    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(missing(path));
        }
        Ok(fs::read_to_string(path)?)
    }

    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let contents = self.read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| WspError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Serializes with stable two-space formatting and a trailing newline, so
    /// writing the same logical content twice produces byte-identical output.
    pub fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value).map_err(|e| WspError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.write_file(path, &format!("{contents}\n"))
    }

    pub fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        self.log_mutation(&format!("Updating file: {}", path.display()));
        if self.dry_run {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn create_dir_all(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        self.log_mutation(&format!("Creating directory: {}", path.display()));
        if self.dry_run {
            return Ok(());
        }
        fs::create_dir_all(path)?;
        Ok(())
    }

    /// Copy a single file, creating parent directories as needed.
    pub fn copy_file(&self, src: &Path, dest: &Path) -> Result<()> {
        if !src.exists() {
            return Err(missing(src));
        }
        wsp_logger::verbose(&format!(
            "  Copying {} to {}",
            src.display(),
            dest.display()
        ));
        if self.dry_run {
            return Ok(());
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dest)?;
        Ok(())
    }

    /// Recursively copy a directory tree. Names in `options.exclude` are
    /// skipped at any depth, and symlinked entries are never followed.
    /// In dry-run mode the destination may still hold content an earlier,
    /// skipped mutation would have removed, so the existence check applies
    /// only when the copy is real.
    pub fn copy_tree(&self, src: &Path, dest: &Path, options: &CopyOptions) -> Result<()> {
        if !src.exists() {
            return Err(missing(src));
        }
        self.log_mutation(&format!(
            "Copying from: {} to {}",
            src.display(),
            dest.display()
        ));
        if self.dry_run {
            return Ok(());
        }
        if dest.exists() && !options.overwrite {
            return Err(already_exists(dest));
        }
        self.copy_tree_inner(src, dest, options)
    }

    fn copy_tree_inner(&self, src: &Path, dest: &Path, options: &CopyOptions) -> Result<()> {
        fs::create_dir_all(dest)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            let name = entry.file_name();
            if let Some(name_str) = name.to_str() {
                if options.exclude.iter().any(|ex| ex == name_str) {
                    continue;
                }
            }

            let from = entry.path();
            let to = dest.join(&name);
            let file_type = entry.file_type()?;
            if file_type.is_symlink() {
                wsp_logger::verbose(&format!("  Skipping symlink: {}", from.display()));
            } else if file_type.is_dir() {
                self.copy_tree_inner(&from, &to, options)?;
            } else {
                fs::copy(&from, &to)?;
            }
        }
        Ok(())
    }

    /// Move a file or directory. Used for template materialization renames.
    /// In dry-run mode the paths may not exist yet (they would have been
    /// created by an earlier, skipped mutation), so checks apply only when
    /// the move is real.
    pub fn rename(&self, src: &Path, dest: &Path) -> Result<()> {
        self.log_mutation(&format!(
            "Moving \"{}\" to \"{}\"",
            src.display(),
            dest.display()
        ));
        if self.dry_run {
            return Ok(());
        }
        if !src.exists() {
            return Err(missing(src));
        }
        if dest.exists() {
            return Err(already_exists(dest));
        }
        fs::rename(src, dest)?;
        Ok(())
    }

    /// Remove a file, directory tree or symlink. Removing a path that does
    /// not exist is a no-op with a warning, not an error.
    pub fn remove(&self, path: &Path) -> Result<()> {
        if self.dry_run {
            self.log_mutation(&format!("Deleting: {}", path.display()));
            return Ok(());
        }
        let Ok(metadata) = path.symlink_metadata() else {
            wsp_logger::warn(&format!(
                "Not deleted because it does not exist: {}",
                path.display()
            ));
            return Ok(());
        };

        self.log_mutation(&format!("Deleting: {}", path.display()));
        if metadata.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn missing(path: &Path) -> WspError {
    WspError::NotFound(format!(
        "A required file or directory is missing.\n\t{}",
        path.display()
    ))
}

fn already_exists(path: &Path) -> WspError {
    WspError::AlreadyExists(format!("The directory already exists.\n\t{}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dry_run_mutations_touch_nothing() {
        let tmp = TempDir::new().unwrap();
        let fs = Fs::new(true);

        let file = tmp.path().join("a.json");
        fs.write_file(&file, "{}").unwrap();
        assert!(!file.exists());

        let dir = tmp.path().join("dir");
        fs.create_dir_all(&dir).unwrap();
        assert!(!dir.exists());

        std::fs::write(tmp.path().join("real.txt"), "x").unwrap();
        fs.remove(&tmp.path().join("real.txt")).unwrap();
        assert!(tmp.path().join("real.txt").exists());
    }

    #[test]
    fn copy_tree_applies_exclusions() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir_all(src.join("node_modules/dep")).unwrap();
        std::fs::create_dir_all(src.join("sub")).unwrap();
        std::fs::write(src.join("keep.txt"), "k").unwrap();
        std::fs::write(src.join("sub/nested.txt"), "n").unwrap();
        std::fs::write(src.join("node_modules/dep/x.js"), "x").unwrap();

        let dest = tmp.path().join("dest");
        let fs = Fs::new(false);
        fs.copy_tree(
            &src,
            &dest,
            &CopyOptions {
                overwrite: false,
                exclude: vec!["node_modules".to_string()],
            },
        )
        .unwrap();

        assert!(dest.join("keep.txt").exists());
        assert!(dest.join("sub/nested.txt").exists());
        assert!(!dest.join("node_modules").exists());
    }

    #[test]
    fn dry_run_copy_tree_accepts_a_doomed_destination() {
        // An earlier dry-run remove may have targeted the destination; the
        // copy must not fail on content that would already be gone.
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(dest.join("stale.log"), "old").unwrap();

        let fs = Fs::new(true);
        fs.copy_tree(&src, &dest, &CopyOptions::default()).unwrap();
        assert!(dest.join("stale.log").exists());
    }

    #[test]
    fn copy_tree_rejects_existing_destination() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::create_dir_all(&dest).unwrap();

        let fs = Fs::new(false);
        let err = fs.copy_tree(&src, &dest, &CopyOptions::default()).unwrap_err();
        assert!(matches!(err, WspError::AlreadyExists(_)));
    }

    #[test]
    fn remove_missing_path_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let fs = Fs::new(false);
        fs.remove(&tmp.path().join("never-existed")).unwrap();
    }

    #[test]
    fn write_json_is_byte_idempotent() {
        let tmp = TempDir::new().unwrap();
        let fs = Fs::new(false);
        let path = tmp.path().join("doc.json");
        let value = serde_json::json!({ "name": "a", "version": "1.0.0" });

        fs.write_json(&path, &value).unwrap();
        let first = std::fs::read(&path).unwrap();
        fs.write_json(&path, &value).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
        assert!(first.ends_with(b"\n"));
    }

    #[test]
    fn read_json_reports_parse_failures_with_path() {
        let tmp = TempDir::new().unwrap();
        let fs = Fs::new(false);
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = fs
            .read_json::<serde_json::Value>(&path)
            .unwrap_err();
        match err {
            WspError::Parse { path: p, .. } => assert!(p.ends_with("bad.json")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
