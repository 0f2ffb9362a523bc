pub mod commands;
pub mod handlers;

use clap::Parser;

use wsp_error::{Result, WspError};
use wsp_fsio::Fs;
use wsp_workspace::Workspace;

use commands::{Cli, Commands};
use handlers::{
    BundleHandler, CreateHandler, ListHandler, ReferenceHandler, ReleaseHandler, RemoveHandler,
    RenameHandler,
};

/// Parse arguments, run the selected command and return the process exit
/// code. Expected failures print one concise line; the full detail of
/// anything unexpected is already in the message.
pub fn run() -> i32 {
    let cli = Cli::parse();
    wsp_logger::init_logger(cli.verbose);

    if cli.dry_run {
        wsp_logger::info("Dry run: no changes will be made.");
    }

    match dispatch(&cli) {
        Ok(()) => 0,
        Err(err) => {
            wsp_logger::error(&err.to_string());
            1
        }
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    let fs = Fs::new(cli.dry_run);
    let cwd = std::env::current_dir().map_err(WspError::from)?;
    let ws = Workspace::locate(&cwd, fs)?;

    let needs_install = match &cli.command {
        Commands::Create {
            pkg_name,
            template,
            generator,
            dir,
        } => CreateHandler::handle(
            &ws,
            pkg_name,
            template.as_deref(),
            generator.as_deref(),
            dir.as_deref(),
        )?,
        Commands::Remove { pkg_name, force } => RemoveHandler::handle(&ws, pkg_name, *force)?,
        Commands::Rename { from, to, dir } => {
            RenameHandler::handle(&ws, from, to, dir.as_deref())?
        }
        Commands::Ref { from, to } => ReferenceHandler::handle_add(&ws, from, to)?,
        Commands::Unref { from, to, all: _ } => {
            ReferenceHandler::handle_remove(&ws, from.as_deref(), to)?
        }
        Commands::List => ListHandler::handle(&ws)?,
        Commands::Bundle {
            app_name,
            out_dir,
            node_modules,
            focus,
        } => BundleHandler::handle(&ws, app_name, out_dir, *node_modules, *focus)?,
        Commands::Release {
            pkg_names,
            set_version,
            access,
            tag,
            otp,
        } => ReleaseHandler::handle(
            &ws,
            pkg_names,
            set_version,
            access.as_deref(),
            tag.as_deref(),
            otp.as_deref(),
        )?,
    };

    if needs_install && !cli.no_yarn && !cli.dry_run {
        wsp_logger::success("Running yarn...");
        wsp_runtime::install(ws.root())?;
    }

    Ok(())
}
