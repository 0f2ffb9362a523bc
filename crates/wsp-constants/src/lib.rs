pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Workspace scaffolding and package graph manager for TypeScript monorepos";
pub const BIN_NAME: &str = "wsp";

/// The file whose presence marks the workspace root.
pub const LOCKFILE_MARKER: &str = "yarn.lock";

/// Directory under the workspace root holding one subdirectory per package.
pub const PACKAGES_DIR: &str = "packages";

/// Directory under the workspace root where named templates live.
pub const TEMPLATES_DIR: &str = "templates";

pub const PACKAGE_JSON: &str = "package.json";

/// Build-configuration files are every `tsconfig*.json` in a package directory.
pub const TSCONFIG_PREFIX: &str = "tsconfig";
pub const TSCONFIG_SUFFIX: &str = ".json";

/// Optional per-template rename table, removed after materialization.
pub const TEMPLATE_MANIFEST: &str = "template.manifest.json";

pub const NODE_MODULES: &str = "node_modules";
pub const BUILD_OUTPUT_DIR: &str = "lib";
pub const SRC_DIR: &str = "src";

/// Version constraint written for workspace-local dependencies.
pub const WORKSPACE_VERSION_CONSTRAINT: &str = "*";

/// Files that may be left behind in a target directory without blocking
/// package creation. They are deleted before the template is copied.
pub const BENIGN_LEFTOVERS: &[&str] = &["yarn-error.log", "npm-debug.log", ".DS_Store"];

/// Directory names skipped when copying a template into a new package.
pub const TEMPLATE_COPY_EXCLUDES: &[&str] = &[NODE_MODULES, BUILD_OUTPUT_DIR];
