//! Process-wide logging with daily files and an optional colorized console echo.
//!
//! Call [`init_from_env`] (or [`init`] with an explicit [`Config`]) once at
//! startup. Records go to `<LOG_PATH>/<DD-MM-YYYY>.log` in append mode, and to
//! the console color-coded by severity when `PRINT_TO_CONSOLE` is enabled.
//! Afterwards the `debug!` .. `critical!` macros log from anywhere in the
//! process.
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     let logger = daylog::init_from_env()?;
//!     daylog::info!("starting up with level {}", logger.min_level());
//!     Ok(())
//! }
//! ```

mod config;
mod format;
mod level;
mod logger;
mod macros;
mod sink;

pub use config::Config;
pub use format::Record;
pub use level::{ConfigurationError, Level};
pub use logger::{global, init, init_from_env, InitError, Logger, LoggerHandle};
pub use sink::{ConsoleSink, FileSink, Sink};

#[doc(hidden)]
pub use logger::log_at;
