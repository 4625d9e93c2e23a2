use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use print_logger::{
    set_log_level_str, FormatArg, Logger, LoggerConfig, LoggerFactory, PrintServiceProvider,
    ServiceProvider, Severity,
};
use std::io;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// Call the logger directly through the provider's factory
    Direct,
    /// Route `log::*!` macros through the backend
    Log,
    /// Route `tracing::*!` macros through the backend
    Tracing,
}

/// Prints one line per severity through the console backend.
#[derive(Parser)]
struct Args {
    /// Threshold name (trace, debug, info, warn, error). Unknown names mean info.
    /// Falls back to PRINT_LOG_LEVEL, then .env.
    #[arg(short, long)]
    level: Option<String>,

    /// Logger name used for direct output
    #[arg(short, long, default_value = "print-demo")]
    name: String,

    #[arg(short, long, value_enum, default_value_t = Backend::Direct)]
    backend: Backend,

    /// Attach a sample error chain to the ERROR line
    #[arg(long)]
    with_cause: bool,
}

fn sample_cause() -> anyhow::Error {
    anyhow::Error::new(io::Error::new(io::ErrorKind::NotFound, "settings.toml missing"))
        .context("Failed to load settings")
}

fn main() -> Result<()> {
    let args = Args::parse();

    LoggerConfig::from_env().apply_global();
    if args.level.is_some() {
        set_log_level_str(args.level.as_deref());
    }

    let provider = PrintServiceProvider::new();
    provider.initialize();

    match args.backend {
        Backend::Direct => {
            let logger = provider.logger_factory().get_logger(&args.name);
            logger.trace("trace line");
            logger.debug("debug line");
            logger.info("info line");
            logger.warn("warn line");
            if args.with_cause {
                let cause = sample_cause();
                logger.log_with_cause(Severity::Error, "error line", Some(cause.as_ref()));
            } else {
                logger.error("error line");
            }
            logger
                .log_fmt(
                    Severity::Info,
                    "processed %d items in %.2f s",
                    &[FormatArg::from(42), FormatArg::from(1.5)],
                )
                .context("Demo template did not render")?;
        }
        Backend::Log => {
            provider
                .install_log_facade()
                .context("Failed to install log backend")?;
            log::trace!("trace line");
            log::debug!("debug line");
            log::info!("info line");
            log::warn!("warn line");
            log::error!("error line");
        }
        Backend::Tracing => {
            provider
                .install_tracing()
                .context("Failed to install tracing backend")?;
            tracing::trace!("trace line");
            tracing::debug!("debug line");
            tracing::info!("info line");
            tracing::warn!("warn line");
            tracing::error!("error line");
        }
    }

    Ok(())
}
