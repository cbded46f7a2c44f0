use std::path::PathBuf;

use mpifilter_engine::FilterError;
use mpifilter_record::MalformedRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("{} is not a file", .0.display())]
    InputNotFound(PathBuf),

    #[error("line {line}: {source}")]
    Decode {
        line: u64,
        #[source]
        source: MalformedRecord,
    },

    #[error("line {line}: {source}")]
    Filter {
        line: u64,
        #[source]
        source: FilterError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
