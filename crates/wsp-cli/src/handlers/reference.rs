use wsp_core::RemoveScope;
use wsp_error::Result;
use wsp_workspace::Workspace;

use super::print_header;

pub struct ReferenceHandler;

impl ReferenceHandler {
    pub fn handle_add(ws: &Workspace, from: &str, to: &str) -> Result<bool> {
        print_header("ref", to);
        wsp_core::add_reference(ws, from, to)?;
        wsp_logger::success(&format!("Reference to \"{to}\" added to \"{from}\"."));
        Ok(true)
    }

    /// Returns whether anything changed; an install after a no-op unref
    /// would be wasted work.
    pub fn handle_remove(ws: &Workspace, from: Option<&str>, to: &str) -> Result<bool> {
        print_header("unref", to);
        let scope = match from {
            Some(from) => RemoveScope::From(from),
            None => RemoveScope::All,
        };
        let changed = wsp_core::remove_reference(ws, &scope, to)?;
        if changed {
            wsp_logger::success(&format!("Reference to \"{to}\" removed."));
        }
        Ok(changed)
    }
}
