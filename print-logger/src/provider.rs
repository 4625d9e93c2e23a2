use crate::bridge::{LogBridge, PrintLayer};
use crate::config::Threshold;
use crate::error::InstallError;
use crate::logger::ConsoleLoggerFactory;
use crate::marker::BasicMarkerFactory;
use crate::mdc::NopMdcAdapter;
use crate::traits::{LoggerFactory, MarkerFactory, MdcAdapter, ServiceProvider};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;

/// Facade API version this provider targets. Opaque compatibility constant.
pub const REQUESTED_API_VERSION: &str = "2.0.0";

/// Bundles the console logger factory, a caching marker factory and the
/// no-op diagnostic context, and hooks them into the `log` or `tracing`
/// facade.
#[derive(Debug, Default)]
pub struct PrintServiceProvider {
    logger_factory: ConsoleLoggerFactory,
    marker_factory: BasicMarkerFactory,
    mdc_adapter: NopMdcAdapter,
}

impl PrintServiceProvider {
    /// Provider bound to the process-wide threshold, printing to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose loggers all come from `factory`.
    pub fn with_factory(factory: ConsoleLoggerFactory) -> Self {
        Self {
            logger_factory: factory,
            ..Self::default()
        }
    }

    pub fn console_factory(&self) -> &ConsoleLoggerFactory {
        &self.logger_factory
    }

    pub fn threshold(&self) -> &Threshold {
        self.logger_factory.threshold()
    }

    /// Registers this backend with the `log` crate.
    ///
    /// The facade's static max level is opened to `Trace`; filtering happens
    /// per record against the threshold so later changes take effect.
    pub fn install_log_facade(&self) -> Result<(), InstallError> {
        log::set_boxed_logger(Box::new(LogBridge::new(self.logger_factory.clone())))?;
        log::set_max_level(log::LevelFilter::Trace);
        info!("Installed console backend for the log facade");
        Ok(())
    }

    pub fn tracing_layer(&self) -> PrintLayer {
        PrintLayer::new(self.logger_factory.clone())
    }

    /// Sets a registry carrying [`PrintLayer`] as the global tracing subscriber.
    pub fn install_tracing(&self) -> Result<(), InstallError> {
        let subscriber = tracing_subscriber::registry().with(self.tracing_layer());
        tracing::subscriber::set_global_default(subscriber)?;
        info!("Installed console backend as the global tracing subscriber");
        Ok(())
    }
}

impl ServiceProvider for PrintServiceProvider {
    fn initialize(&self) {
        debug!(
            "Print service provider ready (api {}, threshold {})",
            REQUESTED_API_VERSION,
            self.threshold().get()
        );
    }

    fn logger_factory(&self) -> &dyn LoggerFactory {
        &self.logger_factory
    }

    fn marker_factory(&self) -> &dyn MarkerFactory {
        &self.marker_factory
    }

    fn mdc_adapter(&self) -> &dyn MdcAdapter {
        &self.mdc_adapter
    }

    fn requested_api_version(&self) -> &str {
        REQUESTED_API_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::test_support::SharedBuffer;
    use crate::severity::Severity;
    use crate::traits::Logger;

    #[test]
    fn test_requested_api_version() {
        let provider = PrintServiceProvider::new();
        assert_eq!(provider.requested_api_version(), "2.0.0");
    }

    #[test]
    fn test_default_provider_uses_global_threshold() {
        let provider = PrintServiceProvider::new();
        assert!(provider.threshold().shares_cell_with(Threshold::global()));
    }

    #[test]
    fn test_accessors_are_stable() {
        let provider = PrintServiceProvider::new();
        provider.initialize();

        let marker = provider.marker_factory().get_marker("AUDIT");
        assert!(provider.marker_factory().exists("AUDIT"));
        assert_eq!(marker.name(), "AUDIT");

        provider.mdc_adapter().put("k", "v");
        assert_eq!(provider.mdc_adapter().get("k"), None);
    }

    #[test]
    fn test_marker_qualified_call_behaves_like_plain_call() {
        let buffer = SharedBuffer::default();
        let factory = ConsoleLoggerFactory::new(Threshold::new(Severity::Info))
            .with_writer(buffer.make_writer());
        let provider = PrintServiceProvider::with_factory(factory);

        let marker = provider.marker_factory().get_marker("BILLING");
        let logger = provider.logger_factory().get_logger("svc");

        assert!(!logger.is_enabled_with_marker(&marker, Severity::Debug));
        logger.log_with_marker(&marker, Severity::Debug, "dropped", None);
        logger.log_with_marker(&marker, Severity::Info, "kept", None);

        let out = buffer.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with("] [INFO] svc - kept\n"));
        assert!(!out.contains("BILLING"));
    }
}
