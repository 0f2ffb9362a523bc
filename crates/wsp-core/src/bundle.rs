use std::path::{Path, PathBuf};

use wsp_constants::NODE_MODULES;
use wsp_error::{Result, WspError};
use wsp_fsio::CopyOptions;
use wsp_utils::install_path;
use wsp_workspace::Workspace;

use crate::graph;
use crate::package::Package;

/// Computes the publishable file subset of a package — the same subset a
/// registry publish would include. The production implementation delegates
/// to the package manager; tests substitute a canned lister.
pub trait FileLister {
    fn packed_files(&self, pkg_path: &Path) -> Result<Vec<String>>;
}

pub struct NpmPackLister;

impl FileLister for NpmPackLister {
    fn packed_files(&self, pkg_path: &Path) -> Result<Vec<String>> {
        wsp_runtime::packed_files(pkg_path)
    }
}

pub struct BundleOptions {
    pub out_dir: PathBuf,
    /// Also copy the workspace root `node_modules` into the output.
    pub include_root_node_modules: bool,
}

/// Assemble a standalone, runnable copy of `app_name` and its transitive
/// workspace dependencies under `out_dir`, with closure members placed where
/// the runtime's module resolution will find them.
pub fn bundle(
    ws: &Workspace,
    app_name: &str,
    options: &BundleOptions,
    lister: &dyn FileLister,
) -> Result<()> {
    let all = Package::load_all(ws)?;
    let app = Package::find(&all, app_name)
        .ok_or_else(|| WspError::PackageNotFound(app_name.to_string()))?;

    ensure_empty_output(ws, &options.out_dir)?;

    if options.include_root_node_modules {
        copy_dir_if_exists(
            ws,
            &ws.root().join(NODE_MODULES),
            &options.out_dir.join(NODE_MODULES),
        )?;
    }

    copy_package_files(ws, app, &options.out_dir.join(&app.dir_name), lister)?;

    let out_node_modules = options.out_dir.join(NODE_MODULES);
    for member in graph::transitive_closure(app, &all) {
        copy_package_files(ws, member, &install_path(&out_node_modules, &member.name), lister)?;
    }

    Ok(())
}

/// Merging into a stale prior bundle is never what the user wants.
fn ensure_empty_output(ws: &Workspace, out_dir: &Path) -> Result<()> {
    if ws.fs().exists(out_dir) && !ws.fs().list_dir(out_dir)?.is_empty() {
        return Err(WspError::AlreadyExists(format!(
            "The output directory is not empty.\n\t{}",
            out_dir.display()
        )));
    }
    Ok(())
}

fn copy_package_files(
    ws: &Workspace,
    pkg: &Package,
    dest: &Path,
    lister: &dyn FileLister,
) -> Result<()> {
    wsp_logger::info(&format!("Copying {} to {}", pkg.name, dest.display()));

    for rel in lister.packed_files(&pkg.path)? {
        let from = pkg.path.join(&rel);
        let to = dest.join(&rel);
        // Workspace linking may have left a symlink placeholder here.
        if ws.fs().is_symlink(&to) {
            ws.fs().remove(&to)?;
        }
        ws.fs().copy_file(&from, &to)?;
    }

    // The package-local node_modules holds third-party dependencies pinned
    // at versions that differ from what the top-level target provides;
    // copying them beats deduplicating them.
    copy_dir_if_exists(ws, &pkg.path.join(NODE_MODULES), &dest.join(NODE_MODULES))
}

fn copy_dir_if_exists(ws: &Workspace, src: &Path, dest: &Path) -> Result<()> {
    if !ws.fs().exists(src) {
        wsp_logger::verbose(&format!(
            "  Directory to copy does not exist: \"{}\"",
            src.display()
        ));
        return Ok(());
    }
    if ws.fs().is_symlink(dest) {
        ws.fs().remove(dest)?;
    }
    ws.fs().copy_tree(src, dest, &CopyOptions::default())
}
