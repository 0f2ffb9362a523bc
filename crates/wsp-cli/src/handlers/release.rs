use wsp_core::ReleaseOptions;
use wsp_error::Result;
use wsp_workspace::Workspace;

use super::print_header;

pub struct ReleaseHandler;

impl ReleaseHandler {
    pub fn handle(
        ws: &Workspace,
        pkg_names: &[String],
        version: &str,
        access: Option<&str>,
        tag: Option<&str>,
        otp: Option<&str>,
    ) -> Result<bool> {
        print_header("release", &pkg_names.join(" "));
        wsp_core::publish::release_packages(
            ws,
            pkg_names,
            &ReleaseOptions {
                version: version.to_string(),
                access: access.map(str::to_string),
                tag: tag.map(str::to_string),
                otp: otp.map(str::to_string),
            },
        )?;
        Ok(false)
    }
}
