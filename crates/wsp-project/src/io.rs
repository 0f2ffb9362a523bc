use std::path::Path;

use wsp_constants::{PACKAGE_JSON, TSCONFIG_PREFIX, TSCONFIG_SUFFIX};
use wsp_error::Result;
use wsp_fsio::Fs;

use crate::package_json::PackageJson;
use crate::tsconfig::Tsconfig;

pub fn read_package_json(fs: &Fs, package_dir: &Path) -> Result<PackageJson> {
    fs.read_json(&package_dir.join(PACKAGE_JSON))
}

pub fn write_package_json(fs: &Fs, package_dir: &Path, manifest: &PackageJson) -> Result<()> {
    fs.write_json(&package_dir.join(PACKAGE_JSON), manifest)
}

pub fn read_tsconfig(fs: &Fs, package_dir: &Path, file_name: &str) -> Result<Tsconfig> {
    fs.read_json(&package_dir.join(file_name))
}

pub fn write_tsconfig(
    fs: &Fs,
    package_dir: &Path,
    file_name: &str,
    document: &Tsconfig,
) -> Result<()> {
    fs.write_json(&package_dir.join(file_name), document)
}

/// File names in `package_dir` matching the build-config naming pattern
/// (`tsconfig*.json`), in filesystem enumeration order.
pub fn find_tsconfig_names(fs: &Fs, package_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for path in fs.list_dir(package_dir)? {
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(TSCONFIG_PREFIX) && name.ends_with(TSCONFIG_SUFFIX) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
