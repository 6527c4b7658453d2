//! Common utilities and helpers

pub mod filename;
pub mod logging;
pub mod time;

pub use filename::FilenameUtils;
pub use logging::{init_logging, LogLevel, LoggingConfig};
pub use time::TimeCodec;
