use owo_colors::OwoColorize;
use std::sync::OnceLock;

pub struct Logger {
    verbose: bool,
}

pub enum LogLevel {
    Verbose,
    Info,
    Success,
    Warning,
    Error,
}

impl Logger {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Verbose => {
                if self.verbose {
                    println!("{}", message.bright_black());
                }
            }
            LogLevel::Info => {
                println!("{message}");
            }
            LogLevel::Success => {
                println!("{}", message.bright_green());
            }
            LogLevel::Warning => {
                println!("{}", format!("WARNING: {message}").bright_yellow());
            }
            LogLevel::Error => {
                eprintln!("{}", format!("ERROR: {message}").bright_red());
            }
        }
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(false)
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger. Later calls are ignored, so tests and
/// library consumers that never call this get a non-verbose default.
pub fn init_logger(verbose: bool) {
    let _ = LOGGER.set(Logger::new(verbose));
}

fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::default)
}

pub fn verbose(message: &str) {
    get_logger().verbose(message);
}

pub fn info(message: &str) {
    get_logger().info(message);
}

pub fn success(message: &str) {
    get_logger().success(message);
}

pub fn warn(message: &str) {
    get_logger().warn(message);
}

pub fn error(message: &str) {
    get_logger().error(message);
}
