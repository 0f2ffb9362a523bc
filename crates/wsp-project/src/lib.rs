pub mod io;
pub mod package_json;
pub mod tsconfig;

pub use io::{find_tsconfig_names, read_package_json, read_tsconfig, write_package_json, write_tsconfig};
pub use package_json::{DeployFlags, NodemonConfig, PackageJson};
pub use tsconfig::{CompilerOptions, Reference, Tsconfig};
