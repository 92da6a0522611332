//! Installs the process-wide `tracing` subscriber backed by the global logger.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::config::ObservabilityConfig;
use crate::controller;
use crate::error::ObservabilityError;
use crate::logger::LoggerLayer;
use crate::tui_log_layer;

/// Initialize process logging with the given configuration
///
/// Installs the global subscriber (logger layer plus optional line sink) and
/// applies the configured level through the global controller. Fails if a
/// global subscriber is already set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let controller = controller::global();
    controller.set_colorize(config.colorize);

    let logger_layer =
        LoggerLayer::new(controller.logger().clone()).with_output(config.enable_console);

    // Optional TUI log sink (runtime logs for debug traces screen)
    let tui_layer = tui_log_layer::tui_log_layer(config.log_sink.clone());

    Registry::default()
        .with(logger_layer)
        .with(tui_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let level = config.effective_level();
    controller.configure(level.clone());

    tracing::debug!(
        service.name = %config.service_name,
        level = %level,
        console = config.enable_console,
        "Logging initialized"
    );

    Ok(())
}

/// Initialize with default configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
