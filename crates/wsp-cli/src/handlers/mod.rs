pub mod bundle;
pub mod create;
pub mod list;
pub mod reference;
pub mod release;
pub mod remove;
pub mod rename;

pub use bundle::BundleHandler;
pub use create::CreateHandler;
pub use list::ListHandler;
pub use reference::ReferenceHandler;
pub use release::ReleaseHandler;
pub use remove::RemoveHandler;
pub use rename::RenameHandler;

use owo_colors::OwoColorize;

use wsp_constants::BIN_NAME;

pub(crate) fn print_header(command: &str, subject: &str) {
    println!(
        "{} {} {}",
        BIN_NAME.bright_cyan().bold(),
        command.bright_white(),
        subject.bright_white()
    );
    println!();
}
