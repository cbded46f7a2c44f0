mod driver;
mod error;
mod source;

pub use driver::{StreamStats, filter_stream, filter_stream_with_report};
pub use error::StreamError;
pub use source::Source;
