use wsp_error::Result;
use wsp_workspace::Workspace;

use super::print_header;

pub struct RemoveHandler;

impl RemoveHandler {
    pub fn handle(ws: &Workspace, pkg_name: &str, force: bool) -> Result<bool> {
        print_header("remove", pkg_name);
        wsp_core::remove_package(ws, pkg_name, force)?;
        wsp_logger::success(&format!("Package \"{pkg_name}\" removed."));
        Ok(true)
    }
}
