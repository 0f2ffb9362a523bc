pub mod scoped_name;

use std::path::{Path, PathBuf};

pub use scoped_name::{dir_name_for, strip_scope, validate_name};

/// Where a dependency resolver would look for `package_name` under `base`
/// (usually a `node_modules` directory). Scoped names get a scope
/// subdirectory.
#[must_use]
pub fn install_path(base: &Path, package_name: &str) -> PathBuf {
    if package_name.starts_with('@') {
        if let Some(slash_pos) = package_name.find('/') {
            let scope = &package_name[..slash_pos];
            let name = &package_name[slash_pos + 1..];
            return base.join(scope).join(name);
        }
    }
    base.join(package_name)
}

/// Whether a reference-style relative path points at the given package
/// directory, e.g. `../core` or `../../packages/core` for `core`.
#[must_use]
pub fn path_points_at_dir(path: &str, dir_name: &str) -> bool {
    path == dir_name || path.ends_with(&format!("/{dir_name}"))
}

/// Whether a watch-list entry points at the given package's build output.
#[must_use]
pub fn path_points_at_build_output(path: &str, dir_name: &str, build_dir: &str) -> bool {
    path.ends_with(&format!("/{dir_name}/{build_dir}"))
}
