mod config;
pub mod logging;

pub use config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME, READ_REPORT_BYTES};

pub use logging::init;
