use std::path::PathBuf;

use wsp_core::{BundleOptions, NpmPackLister};
use wsp_error::Result;
use wsp_workspace::Workspace;

use super::print_header;

pub struct BundleHandler;

impl BundleHandler {
    pub fn handle(
        ws: &Workspace,
        app_name: &str,
        out_dir: &str,
        node_modules: bool,
        focus: bool,
    ) -> Result<bool> {
        print_header("bundle", app_name);

        if focus && !ws.fs().dry_run() {
            wsp_logger::success(&format!("Focusing production dependencies for {app_name}..."));
            wsp_runtime::focus_production(ws.root(), app_name)?;
        }

        wsp_core::bundle::bundle(
            ws,
            app_name,
            &BundleOptions {
                out_dir: PathBuf::from(out_dir),
                include_root_node_modules: node_modules,
            },
            &NpmPackLister,
        )?;
        wsp_logger::success(&format!("Bundled \"{app_name}\" into {out_dir}."));
        Ok(false)
    }
}
