mod common;

use common::{parse_line, Capture};
use print_logger::{
    ConsoleLoggerFactory, InstallError, PrintServiceProvider, Severity, Threshold,
};

// One global subscriber per process: a single test covers install and reuse.
#[test]
fn test_install_tracing_routes_events() {
    let capture = Capture::default();
    let threshold = Threshold::new(Severity::Warn);
    let provider = PrintServiceProvider::with_factory(
        ConsoleLoggerFactory::new(threshold.clone()).with_writer(capture.writer()),
    );

    provider.install_tracing().unwrap();

    tracing::info!(target: "worker", "below threshold");
    tracing::warn!(target: "worker", "queue depth {}", 512);
    tracing::error!(target: "worker", "queue overflow");

    let out = capture.contents();
    let worker_lines: Vec<(String, String, String, String)> = out
        .lines()
        .filter_map(parse_line)
        .filter(|(_, _, name, _)| name == "worker")
        .collect();

    assert_eq!(worker_lines.len(), 2, "got: {out}");
    assert_eq!(worker_lines[0].1, "WARN");
    assert_eq!(worker_lines[0].3, "queue depth 512");
    assert_eq!(worker_lines[1].1, "ERROR");
    assert!(!out.contains("below threshold"));

    let second = PrintServiceProvider::new().install_tracing();
    assert!(matches!(second, Err(InstallError::Tracing(_))));
}
