//! Infrastructure layer - Process-wide integrations

pub mod logging;

pub use logging::init_logging;
