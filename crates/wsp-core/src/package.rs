use std::path::{Path, PathBuf};

use wsp_constants::{
    BENIGN_LEFTOVERS, BUILD_OUTPUT_DIR, PACKAGE_JSON, SRC_DIR, TEMPLATE_COPY_EXCLUDES,
    WORKSPACE_VERSION_CONSTRAINT,
};
use wsp_error::{Result, WspError};
use wsp_fsio::CopyOptions;
use wsp_project::{
    PackageJson, Reference, Tsconfig, find_tsconfig_names, read_package_json, read_tsconfig,
    write_package_json, write_tsconfig,
};
use wsp_utils::{dir_name_for, path_points_at_build_output, path_points_at_dir, validate_name};
use wsp_workspace::Workspace;

use crate::graph;
use crate::template;

/// One build-configuration document plus the pristine copy it was loaded
/// with, so a flush can skip files whose content did not change.
#[derive(Debug, Clone)]
pub struct TsconfigFile {
    pub file_name: String,
    pub document: Tsconfig,
    pristine: Tsconfig,
}

/// In-memory representation of one workspace package. A dependency edge to
/// another package exists in up to four places at once (tsconfig reference
/// list, manifest dependency map, compiler-options alias map, nodemon watch
/// list); the reference operations here are the only sanctioned way to
/// mutate any of them, so the representations never drift apart.
#[derive(Debug, Clone)]
pub struct Package {
    /// Declared name, possibly scoped (`@scope/name`).
    pub name: String,
    /// On-disk directory name under the packages root.
    pub dir_name: String,
    pub path: PathBuf,
    pub manifest: PackageJson,
    pub tsconfigs: Vec<TsconfigFile>,
    pristine_manifest: PackageJson,
}

impl Package {
    /// Load one package from its directory. The manifest is required; build
    /// configs are whatever `tsconfig*.json` files are present. Optional
    /// collections default to empty.
    pub fn load(ws: &Workspace, path: &Path) -> Result<Self> {
        let dir_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| WspError::NotFound(format!("Not a package directory: {}", path.display())))?;

        if !ws.fs().exists(&path.join(PACKAGE_JSON)) {
            return Err(WspError::PackageNotFound(dir_name));
        }

        let manifest = read_package_json(ws.fs(), path)?;
        let name = manifest.name.clone().ok_or_else(|| WspError::Parse {
            path: path.join(PACKAGE_JSON).display().to_string(),
            message: "missing \"name\" property".to_string(),
        })?;

        let mut tsconfigs = Vec::new();
        for file_name in find_tsconfig_names(ws.fs(), path)? {
            let document = read_tsconfig(ws.fs(), path, &file_name)?;
            tsconfigs.push(TsconfigFile {
                file_name,
                pristine: document.clone(),
                document,
            });
        }

        Ok(Self {
            name,
            dir_name,
            path: path.to_path_buf(),
            pristine_manifest: manifest.clone(),
            manifest,
            tsconfigs,
        })
    }

    /// Load every package under the packages root, in filesystem enumeration
    /// order. Callers needing determinism sort explicitly.
    pub fn load_all(ws: &Workspace) -> Result<Vec<Self>> {
        let mut all = Vec::new();
        for path in ws.package_paths()? {
            all.push(Self::load(ws, &path)?);
        }
        Ok(all)
    }

    #[must_use]
    pub fn find<'a>(all: &'a [Self], name: &str) -> Option<&'a Self> {
        all.iter().find(|pkg| pkg.name == name)
    }

    /// Create a new package by copying a template, materializing its rename
    /// table and rewriting the manifest name.
    pub fn create(
        ws: &Workspace,
        name: &str,
        template: &str,
        dir_override: Option<&str>,
    ) -> Result<Self> {
        let template_path = ws.template_path(template)?;
        Self::create_from_dir(ws, name, &template_path, dir_override, true)
    }

    /// Shared creation path for template copies and rename's copy-as-is.
    /// Materialization only applies to real templates.
    fn create_from_dir(
        ws: &Workspace,
        name: &str,
        source_dir: &Path,
        dir_override: Option<&str>,
        materialize: bool,
    ) -> Result<Self> {
        validate_name(name)?;
        let dir_name = match dir_override {
            Some(dir) => dir.to_string(),
            None => dir_name_for(name)?,
        };
        let path = ws.package_path(&dir_name);

        prepare_target_dir(ws, &path)?;

        let exclude = if materialize {
            TEMPLATE_COPY_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
        } else {
            Vec::new()
        };
        ws.fs().copy_tree(
            source_dir,
            &path,
            &CopyOptions {
                overwrite: false,
                exclude,
            },
        )?;

        if materialize {
            template::materialize(ws.fs(), source_dir, &path)?;
        }

        // In dry-run mode the destination was never written, so the copied
        // content is read back from the source instead.
        let read_dir = if ws.fs().dry_run() { source_dir } else { &path };
        let mut manifest = read_package_json(ws.fs(), read_dir)?;
        manifest.name = Some(name.to_string());
        write_package_json(ws.fs(), &path, &manifest)?;

        let mut pkg = Self::load(ws, read_dir)?;
        pkg.name = name.to_string();
        pkg.manifest.name = Some(name.to_string());
        pkg.pristine_manifest = pkg.manifest.clone();
        pkg.dir_name = dir_name;
        pkg.path = path;
        Ok(pkg)
    }

    /// Whether any of this package's build configs references `dep`.
    #[must_use]
    pub fn references_package(&self, dep: &Self) -> bool {
        self.tsconfigs.iter().any(|ts| {
            ts.document
                .references
                .iter()
                .any(|r| path_points_at_dir(&r.path, &dep.dir_name))
        })
    }

    /// Add the dependency edge to `dep` in every representation that applies,
    /// then persist. Idempotent: re-adding an existing edge changes nothing
    /// and rewrites nothing.
    pub fn add_reference_to(&mut self, ws: &Workspace, dep: &Self) -> Result<()> {
        self.add_edges(&dep.name, &dep.dir_name, WORKSPACE_VERSION_CONSTRAINT);
        self.flush(ws)
    }

    /// Remove the dependency edge to `dep` wherever it is present, then
    /// persist. Returns whether anything was actually removed, so callers
    /// can skip a reinstall when nothing changed.
    pub fn remove_reference_to(&mut self, ws: &Workspace, dep: &Self) -> Result<bool> {
        let changed = self.remove_edges(&dep.name, &dep.dir_name);
        self.flush(ws)?;
        Ok(changed)
    }

    fn add_edges(&mut self, dep_name: &str, dep_dir: &str, version: &str) {
        for ts in &mut self.tsconfigs {
            let already = ts
                .document
                .references
                .iter()
                .any(|r| path_points_at_dir(&r.path, dep_dir));
            if !already {
                ts.document
                    .references
                    .push(Reference::new(format!("../{dep_dir}")));
            }

            if let Some(paths) = ts.document.paths_mut() {
                if !paths.contains_key(dep_name) {
                    paths.insert(
                        dep_name.to_string(),
                        vec![format!("../{dep_dir}/{SRC_DIR}")],
                    );
                }
            }
        }

        let deps = self.manifest.dependencies_mut();
        if !deps.contains_key(dep_name) {
            deps.insert(dep_name.to_string(), version.to_string());
        }

        if let Some(watch) = self.manifest.watch_list_mut() {
            let already = watch
                .iter()
                .any(|p| path_points_at_build_output(p, dep_dir, BUILD_OUTPUT_DIR));
            if !already {
                watch.push(format!("../{dep_dir}/{BUILD_OUTPUT_DIR}"));
            }
        }
    }

    fn remove_edges(&mut self, dep_name: &str, dep_dir: &str) -> bool {
        let mut changed = false;

        for ts in &mut self.tsconfigs {
            let before = ts.document.references.len();
            ts.document
                .references
                .retain(|r| !path_points_at_dir(&r.path, dep_dir));
            changed |= ts.document.references.len() != before;

            if let Some(paths) = ts.document.paths_mut() {
                changed |= paths.shift_remove(dep_name).is_some();
            }
        }

        if let Some(deps) = self.manifest.dependencies.as_mut() {
            changed |= deps.shift_remove(dep_name).is_some();
        }

        if let Some(watch) = self.manifest.watch_list_mut() {
            let before = watch.len();
            watch.retain(|p| !path_points_at_build_output(p, dep_dir, BUILD_OUTPUT_DIR));
            changed |= watch.len() != before;
        }

        changed
    }

    /// Persist in-memory changes. Only files whose content differs from what
    /// was loaded are rewritten; build configs first, the manifest last.
    pub fn flush(&mut self, ws: &Workspace) -> Result<()> {
        for ts in &mut self.tsconfigs {
            if ts.document != ts.pristine {
                write_tsconfig(ws.fs(), &self.path, &ts.file_name, &ts.document)?;
                ts.pristine = ts.document.clone();
            }
        }
        if self.manifest != self.pristine_manifest {
            write_package_json(ws.fs(), &self.path, &self.manifest)?;
            self.pristine_manifest = self.manifest.clone();
        }
        Ok(())
    }

    /// Delete this package's directory. Refused while other packages still
    /// reference it, unless `force` strips those references first.
    pub fn delete(&self, ws: &Workspace, force: bool) -> Result<()> {
        let mut all = Self::load_all(ws)?;
        let dependents: Vec<String> = graph::find_dependents(self, &all)
            .iter()
            .map(|pkg| pkg.name.clone())
            .collect();

        if !dependents.is_empty() && !force {
            return Err(WspError::ReferencedPackage {
                name: self.name.clone(),
                dependents,
            });
        }

        if force {
            for pkg in &mut all {
                if pkg.name == self.name {
                    continue;
                }
                pkg.remove_reference_to(ws, self)?;
            }
        }

        ws.fs().remove(&self.path)
    }

    /// Rename this package: copy it as-is under the new name, rewrite every
    /// dependent's edge to point at the copy, then delete the old directory.
    /// The old directory goes last so a failure partway through leaves the
    /// graph recoverable.
    pub fn rename(
        &self,
        ws: &Workspace,
        new_name: &str,
        dir_override: Option<&str>,
    ) -> Result<Self> {
        let new_pkg = Self::create_from_dir(ws, new_name, &self.path, dir_override, false)?;

        let mut all = Self::load_all(ws)?;
        for pkg in &mut all {
            if pkg.name == self.name || pkg.name == new_pkg.name {
                continue;
            }
            // Carry the dependent's version constraint over verbatim.
            let version = pkg
                .manifest
                .dependencies
                .as_ref()
                .and_then(|deps| deps.get(&self.name))
                .cloned();
            if pkg.remove_edges(&self.name, &self.dir_name) {
                pkg.add_edges(
                    &new_pkg.name,
                    &new_pkg.dir_name,
                    version.as_deref().unwrap_or(WORKSPACE_VERSION_CONSTRAINT),
                );
                pkg.flush(ws)?;
            }
        }

        ws.fs().remove(&self.path)?;
        Ok(new_pkg)
    }

    /// Rewrite the version field; persists the manifest only.
    pub fn set_version(&mut self, ws: &Workspace, version: &str) -> Result<()> {
        self.manifest.version = Some(version.to_string());
        self.flush(ws)
    }
}

/// Allow creation into a directory that holds only benign leftovers (stale
/// error logs and the like); those are removed first. Anything else blocks.
fn prepare_target_dir(ws: &Workspace, path: &Path) -> Result<()> {
    if !ws.fs().exists(path) {
        return Ok(());
    }
    for entry in ws.fs().list_dir(path)? {
        let name = entry
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if !BENIGN_LEFTOVERS.contains(&name) {
            return Err(WspError::AlreadyExists(format!(
                "The directory already exists.\n\t{}",
                path.display()
            )));
        }
    }
    ws.fs().remove(path)
}
