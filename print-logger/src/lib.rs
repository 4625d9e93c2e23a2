//! # Print Logger - Console Backend for Logging Facades
//!
//! A small logging backend that filters by a shared severity threshold and
//! prints `[yyyy-MM-dd HH:mm:ss] [LEVEL] name - message` lines to stdout.
//!
//! ## Modules
//!
//! - [`config`] - Shared threshold cell and the level setter/getter pair
//! - [`error`] - Typed error handling with thiserror
//! - [`logger`] - `ConsoleLogger`, its factory and the `log_*!` macros
//! - [`marker`] - Named markers (accepted, never acted on)
//! - [`mdc`] - No-op diagnostic context adapter
//! - [`provider`] - Service provider and facade installation
//! - [`bridge`] - `log::Log` and `tracing_subscriber::Layer` adapters
//! - [`traits`] - Facade-side trait definitions
//!
//! ## Example
//!
//! ```
//! use print_logger::{set_log_level_str, Logger, LoggerFactory, PrintServiceProvider, ServiceProvider};
//!
//! set_log_level_str(Some("debug"));
//!
//! let provider = PrintServiceProvider::new();
//! provider.initialize();
//!
//! let logger = provider.logger_factory().get_logger("app");
//! logger.debug("starting");
//! logger.log_fmt(print_logger::Severity::Info, "listening on port %d", &[8080.into()])?;
//! # Ok::<(), print_logger::FormatError>(())
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod logger;
pub mod marker;
pub mod mdc;
pub mod provider;
pub mod severity;
pub mod traits;
pub(crate) mod utils;

pub use bridge::{LogBridge, PrintLayer};
pub use config::{log_level, set_log_level, set_log_level_str, LoggerConfig, Threshold, LEVEL_ENV_VAR};
pub use error::{ConfigError, FormatError, InstallError, ParseSeverityError, PrintLoggerError};
pub use logger::{ConsoleLogger, ConsoleLoggerFactory, LogRecord, TIMESTAMP_FORMAT};
pub use marker::{BasicMarkerFactory, Marker};
pub use mdc::NopMdcAdapter;
pub use provider::{PrintServiceProvider, REQUESTED_API_VERSION};
pub use severity::Severity;
pub use traits::{Logger, LoggerFactory, MarkerFactory, MdcAdapter, ServiceProvider};
pub use utils::{format_template, FormatArg};
