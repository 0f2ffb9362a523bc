pub mod bundle;
pub mod graph;
pub mod list;
pub mod package;
pub mod publish;
pub mod template;

pub use bundle::{BundleOptions, FileLister, NpmPackLister};
pub use package::Package;
pub use publish::ReleaseOptions;
pub use template::CreationStrategy;

use wsp_error::{Result, WspError};
use wsp_workspace::Workspace;

/// Which packages an edge-removal applies to.
pub enum RemoveScope<'a> {
    From(&'a str),
    All,
}

pub fn create_package(
    ws: &Workspace,
    name: &str,
    strategy: &CreationStrategy,
    dir: Option<&str>,
) -> Result<()> {
    match strategy {
        CreationStrategy::TemplateCopy { template } => {
            Package::create(ws, name, template, dir)?;
            Ok(())
        }
        CreationStrategy::ExternalGenerator { command } => {
            wsp_utils::validate_name(name)?;
            let dir_name = match dir {
                Some(dir) => dir.to_string(),
                None => wsp_utils::dir_name_for(name)?,
            };
            template::run_external_generator(ws, &dir_name, command)
        }
    }
}

/// Add a reference (dependency) from one package to another.
pub fn add_reference(ws: &Workspace, from: &str, to: &str) -> Result<()> {
    let mut all = Package::load_all(ws)?;
    let dep = Package::find(&all, to)
        .cloned()
        .ok_or_else(|| WspError::PackageNotFound(to.to_string()))?;
    let from_pkg = all
        .iter_mut()
        .find(|pkg| pkg.name == from)
        .ok_or_else(|| WspError::PackageNotFound(from.to_string()))?;
    from_pkg.add_reference_to(ws, &dep)
}

/// Remove a reference (dependency) on `to` from one package or from every
/// package. Packages holding no such reference are silently skipped.
/// Returns whether anything changed, so callers can skip the reinstall.
pub fn remove_reference(ws: &Workspace, scope: &RemoveScope<'_>, to: &str) -> Result<bool> {
    let mut all = Package::load_all(ws)?;
    let dep = Package::find(&all, to)
        .cloned()
        .ok_or_else(|| WspError::PackageNotFound(to.to_string()))?;

    let mut changed = false;
    match scope {
        RemoveScope::From(from) => {
            let from_pkg = all
                .iter_mut()
                .find(|pkg| &pkg.name == from)
                .ok_or_else(|| WspError::PackageNotFound((*from).to_string()))?;
            changed = from_pkg.remove_reference_to(ws, &dep)?;
        }
        RemoveScope::All => {
            for pkg in &mut all {
                if pkg.name != dep.name {
                    changed |= pkg.remove_reference_to(ws, &dep)?;
                }
            }
            if !changed {
                wsp_logger::warn(&format!("No packages found with a reference to \"{to}\""));
            }
        }
    }

    Ok(changed)
}

pub fn remove_package(ws: &Workspace, name: &str, force: bool) -> Result<()> {
    let all = Package::load_all(ws)?;
    let pkg = Package::find(&all, name)
        .ok_or_else(|| WspError::PackageNotFound(name.to_string()))?;
    pkg.delete(ws, force)
}

pub fn rename_package(
    ws: &Workspace,
    from: &str,
    to: &str,
    dir: Option<&str>,
) -> Result<()> {
    let all = Package::load_all(ws)?;
    if Package::find(&all, to).is_some() {
        return Err(WspError::AlreadyExists(format!(
            "Package \"{to}\" already exists. Choose a different name."
        )));
    }
    let from_pkg = Package::find(&all, from)
        .ok_or_else(|| WspError::PackageNotFound(from.to_string()))?;
    from_pkg.rename(ws, to, dir)?;
    Ok(())
}
