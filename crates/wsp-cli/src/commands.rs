use clap::{ArgGroup, Parser, Subcommand};

use wsp_constants::{BIN_NAME, DESCRIPTION, VERSION};

#[derive(Parser)]
#[command(name = BIN_NAME)]
#[command(version = VERSION)]
#[command(propagate_version = true)]
#[command(about = DESCRIPTION, long_about = None)]
pub struct Cli {
    /// Report every mutation without touching the disk
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,
    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
    /// Skip the yarn install that normally follows a mutating command
    #[arg(long = "no-yarn", global = true)]
    pub no_yarn: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Creates a new package from a template or an external generator
    #[command(alias = "add")]
    #[command(group(ArgGroup::new("source").required(true).args(["template", "generator"])))]
    Create {
        /// The package name, optionally scoped (e.g. @myorg/my-lib)
        pkg_name: String,
        /// Template to copy (a name under templates/ or a workspace-relative path)
        #[arg(short = 't', long = "template")]
        template: Option<String>,
        /// External generator command to run instead (e.g. "npx create-react-app")
        #[arg(long = "generator")]
        generator: Option<String>,
        /// Directory name under packages/ (defaults to the name without its scope)
        #[arg(short = 'd', long = "dir")]
        dir: Option<String>,
    },
    /// Removes a package and its directory
    #[command(alias = "rm")]
    Remove {
        /// The package to remove
        pkg_name: String,
        /// Also strip every reference other packages hold to it
        #[arg(long = "force")]
        force: bool,
    },
    /// Renames a package and rewrites every reference to it
    Rename {
        /// The current package name
        #[arg(short = 'f', long = "from")]
        from: String,
        /// The new package name
        #[arg(short = 't', long = "to")]
        to: String,
        /// Directory name for the renamed package
        #[arg(short = 'd', long = "dir")]
        dir: Option<String>,
    },
    /// Adds a reference (dependency) from one package to another
    Ref {
        /// The package gaining the reference
        #[arg(short = 'f', long = "from")]
        from: String,
        /// The package being referenced
        #[arg(short = 't', long = "to")]
        to: String,
    },
    /// Removes a reference from one package, or from all packages
    #[command(group(ArgGroup::new("scope").required(true).args(["from", "all"])))]
    Unref {
        /// The package whose reference is removed
        #[arg(short = 'f', long = "from")]
        from: Option<String>,
        /// The referenced package
        #[arg(short = 't', long = "to")]
        to: String,
        /// Remove the reference from every package that holds one
        #[arg(short = 'a', long = "all")]
        all: bool,
    },
    /// Lists all packages and the references between them
    #[command(alias = "ls")]
    List,
    /// Copies an application and its workspace dependencies into a
    /// standalone, runnable directory
    Bundle {
        /// The application package to bundle
        app_name: String,
        /// Output directory (must be empty or absent)
        #[arg(short = 'o', long = "out")]
        out_dir: String,
        /// Also copy the workspace root node_modules into the output
        #[arg(short = 'n', long = "node-modules")]
        node_modules: bool,
        /// Run a production-only dependency focus for the app first
        #[arg(long = "focus")]
        focus: bool,
    },
    /// Sets a version on packages and publishes them to the registry
    #[command(alias = "publish")]
    Release {
        /// The packages to publish
        #[arg(required = true)]
        pkg_names: Vec<String>,
        /// Version to write into each package manifest before publishing
        #[arg(long = "set-version", alias = "ver")]
        set_version: String,
        /// npm publish --access value
        #[arg(long = "access")]
        access: Option<String>,
        /// npm publish --tag value
        #[arg(long = "tag")]
        tag: Option<String>,
        /// npm publish --otp value
        #[arg(long = "otp")]
        otp: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_requires_a_template_or_generator() {
        assert!(Cli::try_parse_from(["wsp", "create", "my-lib"]).is_err());
        assert!(Cli::try_parse_from(["wsp", "create", "my-lib", "-t", "node-lib"]).is_ok());
        assert!(
            Cli::try_parse_from(["wsp", "create", "my-lib", "--generator", "npx create-x"])
                .is_ok()
        );
        assert!(Cli::try_parse_from([
            "wsp", "create", "my-lib", "-t", "node-lib", "--generator", "npx create-x"
        ])
        .is_err());
    }

    #[test]
    fn unref_requires_a_scope() {
        assert!(Cli::try_parse_from(["wsp", "unref", "-t", "core"]).is_err());
        assert!(Cli::try_parse_from(["wsp", "unref", "-t", "core", "-f", "app"]).is_ok());
        assert!(Cli::try_parse_from(["wsp", "unref", "-t", "core", "--all"]).is_ok());
        assert!(
            Cli::try_parse_from(["wsp", "unref", "-t", "core", "-f", "app", "--all"]).is_err()
        );
    }

    #[test]
    fn global_flags_parse_after_the_subcommand() {
        let cli = Cli::try_parse_from(["wsp", "list", "--dry-run", "-v", "--no-yarn"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert!(cli.no_yarn);
    }
}
