use std::sync::Arc;

use parking_lot::Mutex;
use parley_observability::{configure_global_log_level, init, LogSink, ObservabilityConfig, ObservabilityError};

// Single test: it installs the global subscriber.
#[test]
fn init_gates_events_by_configured_level() {
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let captured = lines.clone();
    let sink: LogSink = Arc::new(move |line| captured.lock().push(line));

    let config = ObservabilityConfig::new("init-test")
        .with_log_level("warning")
        .with_console(false)
        .with_log_sink(sink);
    init(config).unwrap();

    tracing::info!("hidden at warning");
    tracing::warn!("shown at warning");
    assert!(lines.lock().iter().any(|l| l.contains("shown at warning")));
    assert!(!lines.lock().iter().any(|l| l.contains("hidden at warning")));

    configure_global_log_level("debug");
    tracing::debug!("shown at debug");
    assert!(lines.lock().iter().any(|l| l.contains("shown at debug")));

    configure_global_log_level("silent");
    tracing::error!("dropped when silent");
    assert!(!lines.lock().iter().any(|l| l.contains("dropped when silent")));

    let again = init(ObservabilityConfig::default());
    assert!(matches!(again, Err(ObservabilityError::InitFailed(_))));
}
