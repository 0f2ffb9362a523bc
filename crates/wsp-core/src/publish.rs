use wsp_constants::BUILD_OUTPUT_DIR;
use wsp_error::{Result, WspError};
use wsp_runtime::PublishOptions;
use wsp_workspace::Workspace;

use crate::package::Package;

pub struct ReleaseOptions {
    pub version: String,
    pub access: Option<String>,
    pub tag: Option<String>,
    pub otp: Option<String>,
}

/// Set the requested version on each named package and publish it to the
/// registry. All name and build-output validation happens before the first
/// mutation.
pub fn release_packages(ws: &Workspace, pkg_names: &[String], options: &ReleaseOptions) -> Result<()> {
    let mut all = Package::load_all(ws)?;

    for name in pkg_names {
        let pkg = Package::find(&all, name)
            .ok_or_else(|| WspError::PackageNotFound(name.clone()))?;
        if !ws.fs().exists(&pkg.path.join(BUILD_OUTPUT_DIR)) {
            return Err(WspError::NotFound(format!(
                "./{BUILD_OUTPUT_DIR} folder for package {name} not found. Package must be built before releasing."
            )));
        }
    }

    for name in pkg_names {
        let Some(pkg) = all.iter_mut().find(|pkg| &pkg.name == name) else {
            continue; // validated above
        };

        wsp_logger::success(&format!("Setting version to {}...", options.version));
        pkg.set_version(ws, &options.version)?;

        wsp_logger::success(&format!(
            "Publishing {}@{} to npm...",
            pkg.name, options.version
        ));
        wsp_runtime::publish(
            &pkg.path,
            &PublishOptions {
                access: options.access.clone(),
                tag: options.tag.clone(),
                otp: options.otp.clone(),
                dry_run: ws.fs().dry_run(),
            },
        )?;

        wsp_logger::success("Publish complete.");
    }

    Ok(())
}
