use wsp_core::CreationStrategy;
use wsp_error::{Result, WspError};
use wsp_workspace::Workspace;

use super::print_header;

pub struct CreateHandler;

impl CreateHandler {
    /// Returns whether an install should follow.
    pub fn handle(
        ws: &Workspace,
        pkg_name: &str,
        template: Option<&str>,
        generator: Option<&str>,
        dir: Option<&str>,
    ) -> Result<bool> {
        print_header("create", pkg_name);

        // clap guarantees exactly one of the two sources is present.
        let strategy = match (template, generator) {
            (Some(template), _) => CreationStrategy::TemplateCopy {
                template: template.to_string(),
            },
            (_, Some(command)) => CreationStrategy::ExternalGenerator {
                command: command.to_string(),
            },
            (None, None) => {
                return Err(WspError::NotFound(
                    "A template or generator must be specified.".to_string(),
                ));
            }
        };

        wsp_core::create_package(ws, pkg_name, &strategy, dir)?;
        wsp_logger::success(&format!("Package \"{pkg_name}\" created."));

        // Generators run their own install.
        Ok(matches!(strategy, CreationStrategy::TemplateCopy { .. }))
    }
}
