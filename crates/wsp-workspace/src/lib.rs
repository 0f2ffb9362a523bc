use std::path::{Path, PathBuf};

use wsp_constants::{LOCKFILE_MARKER, PACKAGES_DIR, TEMPLATES_DIR};
use wsp_error::{Result, WspError};
use wsp_fsio::Fs;

/// The explicitly constructed workspace context: resolved root plus the
/// filesystem capability. Everything that reads or mutates packages takes
/// one of these instead of reaching for process-wide state, so one test
/// process can drive several simulated workspaces.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    fs: Fs,
}

impl Workspace {
    /// Use `root` directly as the workspace root. Callers that already know
    /// the root (tests, mostly) skip the lockfile walk.
    #[must_use]
    pub fn new(root: PathBuf, fs: Fs) -> Self {
        Self { root, fs }
    }

    /// Walk upward from `start` until a directory containing the lockfile
    /// marker is found.
    pub fn locate(start: &Path, fs: Fs) -> Result<Self> {
        let mut current = start.to_path_buf();
        loop {
            if fs.exists(&current.join(LOCKFILE_MARKER)) {
                return Ok(Self { root: current, fs });
            }
            if !current.pop() || current.as_os_str().is_empty() {
                return Err(WspError::NotFound(format!(
                    "Could not find a {LOCKFILE_MARKER} file to mark the workspace root."
                )));
            }
        }
    }

    #[must_use]
    pub fn fs(&self) -> &Fs {
        &self.fs
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn packages_root(&self) -> Result<PathBuf> {
        let path = self.root.join(PACKAGES_DIR);
        if !self.fs.exists(&path) {
            return Err(WspError::NotFound(format!(
                "Could not find the \"{PACKAGES_DIR}\" directory in the workspace root.\n\t{}",
                path.display()
            )));
        }
        Ok(path)
    }

    #[must_use]
    pub fn package_path(&self, dir_name: &str) -> PathBuf {
        self.root.join(PACKAGES_DIR).join(dir_name)
    }

    /// Every package directory under the packages root, in filesystem
    /// enumeration order. Callers needing determinism sort explicitly.
    pub fn package_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = self.fs.list_dir(&self.packages_root()?)?;
        Ok(entries.into_iter().filter(|p| p.is_dir()).collect())
    }

    /// Resolve a template spec: a bare name looks under the workspace's
    /// `templates` directory, anything with a path separator resolves
    /// relative to the workspace root.
    pub fn template_path(&self, spec: &str) -> Result<PathBuf> {
        let path = if spec.contains(std::path::MAIN_SEPARATOR) || spec.contains('/') {
            self.root.join(spec)
        } else {
            self.root.join(TEMPLATES_DIR).join(spec)
        };

        if !self.fs.exists(&path) {
            return Err(WspError::NotFound(format!(
                "Template directory could not be found.\n\t{}",
                path.display()
            )));
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace_on_disk(tmp: &TempDir) -> PathBuf {
        let root = tmp.path().join("repo");
        std::fs::create_dir_all(root.join("packages")).unwrap();
        std::fs::write(root.join("yarn.lock"), "").unwrap();
        root
    }

    #[test]
    fn locate_walks_up_to_the_lockfile() {
        let tmp = TempDir::new().unwrap();
        let root = workspace_on_disk(&tmp);
        let nested = root.join("packages/app/src");
        std::fs::create_dir_all(&nested).unwrap();

        let ws = Workspace::locate(&nested, Fs::new(false)).unwrap();
        assert_eq!(ws.root(), root.as_path());
    }

    #[test]
    fn locate_fails_without_a_marker() {
        let tmp = TempDir::new().unwrap();
        let err = Workspace::locate(tmp.path(), Fs::new(false)).unwrap_err();
        assert!(matches!(err, WspError::NotFound(_)));
    }

    #[test]
    fn package_paths_lists_directories_only() {
        let tmp = TempDir::new().unwrap();
        let root = workspace_on_disk(&tmp);
        std::fs::create_dir_all(root.join("packages/core")).unwrap();
        std::fs::create_dir_all(root.join("packages/app")).unwrap();
        std::fs::write(root.join("packages/README.md"), "").unwrap();

        let ws = Workspace::new(root, Fs::new(false));
        let mut names: Vec<String> = ws
            .package_paths()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["app", "core"]);
    }

    #[test]
    fn template_resolution_by_name_and_path() {
        let tmp = TempDir::new().unwrap();
        let root = workspace_on_disk(&tmp);
        std::fs::create_dir_all(root.join("templates/node-lib")).unwrap();
        std::fs::create_dir_all(root.join("my/custom-template")).unwrap();

        let ws = Workspace::new(root.clone(), Fs::new(false));
        assert_eq!(
            ws.template_path("node-lib").unwrap(),
            root.join("templates/node-lib")
        );
        assert_eq!(
            ws.template_path("my/custom-template").unwrap(),
            root.join("my/custom-template")
        );
        assert!(matches!(
            ws.template_path("nope"),
            Err(WspError::NotFound(_))
        ));
    }
}
