use wsp_error::Result;
use wsp_workspace::Workspace;

use crate::package::Package;

/// Print every package and the references it holds, with the dependency
/// version and watch entry backing each edge. Sorted by name for stable
/// output; enumeration order is not.
pub fn list_packages(ws: &Workspace) -> Result<()> {
    let mut all = Package::load_all(ws)?;
    all.sort_by(|a, b| a.name.cmp(&b.name));

    for pkg in &all {
        wsp_logger::success(&format!("\n{}", pkg.name));

        for dep in all.iter().filter(|p| pkg.references_package(p)) {
            wsp_logger::info(&format!("  -> {}", dep.name));

            let version = pkg
                .manifest
                .dependencies
                .as_ref()
                .and_then(|deps| deps.get(&dep.name))
                .map_or("(none)", String::as_str);
            wsp_logger::info(&format!("      dependency version: {version}"));

            if let Some(watch) = pkg.manifest.watch_list() {
                let entry = watch
                    .iter()
                    .find(|path| path.contains(&format!("/{}/", dep.dir_name)))
                    .map_or("(none)", String::as_str);
                wsp_logger::info(&format!("      nodemon watch: {entry}"));
            }
        }
    }

    Ok(())
}
