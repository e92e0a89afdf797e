pub mod errors;
pub mod logging;
pub mod records;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::RecordTable;
pub use root::{CliOverrides, Config};
