use std::fmt;

#[derive(Debug)]
pub enum WspError {
    /// A required path (template, directory, file) does not exist.
    NotFound(String),
    /// A target directory or output location is already populated.
    AlreadyExists(String),
    /// No workspace package has the given declared name.
    PackageNotFound(String),
    /// A package cannot be deleted while other packages reference it.
    ReferencedPackage {
        name: String,
        dependents: Vec<String>,
    },
    /// A malformed (scoped) package name.
    InvalidName(String),
    /// An on-disk document could not be parsed.
    Parse { path: String, message: String },
    /// A package-manager subprocess exited with a non-zero status.
    Subprocess(String),
    IoError(String),
}

impl fmt::Display for WspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => {
                write!(f, "{what}")
            }
            Self::AlreadyExists(what) => {
                write!(f, "{what}")
            }
            Self::PackageNotFound(name) => {
                write!(
                    f,
                    "Package \"{name}\" was not found. The value must match the \"name\" property in package.json."
                )
            }
            Self::ReferencedPackage { name, dependents } => {
                write!(
                    f,
                    "\"{name}\" is referenced by other packages. Use the '--force' option to remove the package and all references to it.\nReferenced by:\n\t{}",
                    dependents.join("\n\t")
                )
            }
            Self::InvalidName(msg) => {
                write!(f, "Invalid package name: {msg}")
            }
            Self::Parse { path, message } => {
                write!(f, "Failed to parse {path}: {message}")
            }
            Self::Subprocess(msg) => {
                write!(f, "Command failed: {msg}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for WspError {}

impl From<std::io::Error> for WspError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<anyhow::Error> for WspError {
    fn from(err: anyhow::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WspError>;
