use wsp_error::Result;
use wsp_workspace::Workspace;

pub struct ListHandler;

impl ListHandler {
    pub fn handle(ws: &Workspace) -> Result<bool> {
        wsp_core::list::list_packages(ws)?;
        Ok(false)
    }
}
