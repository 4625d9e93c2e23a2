//! Adapters plugging the console backend into the `log` and `tracing` facades.

mod log_bridge;
mod tracing_layer;

pub use log_bridge::LogBridge;
pub use tracing_layer::PrintLayer;
