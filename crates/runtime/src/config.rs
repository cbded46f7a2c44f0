pub const PROGRAM_NAME: &str = "mpifilter";

/// Environment variable holding the stderr log threshold.
pub const PROGRAM_LOG_LEVEL: &str = "MPIFILTER_LOG_LEVEL";

/// Emit a progress line each time this much more input has been read.
pub const READ_REPORT_BYTES: u64 = 50 * 1024 * 1024;
