mod common;

use common::Capture;
use print_logger::{
    ConsoleLoggerFactory, InstallError, PrintServiceProvider, Severity, Threshold,
};

// The log facade accepts one backend per process, so everything runs in a
// single test.
#[test]
fn test_log_facade_routes_through_console_backend() {
    let capture = Capture::default();
    let threshold = Threshold::new(Severity::Info);
    let provider = PrintServiceProvider::with_factory(
        ConsoleLoggerFactory::new(threshold.clone()).with_writer(capture.writer()),
    );

    provider.install_log_facade().unwrap();
    assert_eq!(log::max_level(), log::LevelFilter::Trace);

    log::info!(target: "facade.orders", "order {} shipped", 7);
    log::debug!(target: "facade.orders", "hidden at info");

    threshold.set(Severity::Debug);
    log::debug!(target: "facade.orders", "visible at debug");

    let out = capture.contents();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "got: {out}");
    assert!(lines[0].ends_with("] [INFO] facade.orders - order 7 shipped"));
    assert!(lines[1].ends_with("] [DEBUG] facade.orders - visible at debug"));

    let second = PrintServiceProvider::new().install_log_facade();
    assert!(matches!(second, Err(InstallError::LogFacade(_))));
}
