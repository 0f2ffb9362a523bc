use wsp_error::Result;
use wsp_workspace::Workspace;

use super::print_header;

pub struct RenameHandler;

impl RenameHandler {
    pub fn handle(ws: &Workspace, from: &str, to: &str, dir: Option<&str>) -> Result<bool> {
        print_header("rename", from);
        wsp_core::rename_package(ws, from, to, dir)?;
        wsp_logger::success(&format!("Package \"{from}\" renamed to \"{to}\"."));
        Ok(true)
    }
}
