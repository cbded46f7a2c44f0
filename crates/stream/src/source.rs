use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::info;

use crate::StreamError;

/// Where mpistat lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A gzip-compressed file, as mpistat writes it.
    File(PathBuf),
    /// Uncompressed lines on standard input.
    Stdin,
}

impl Source {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Source::File(path.to_path_buf()),
            _ => Source::Stdin,
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, StreamError> {
        match self {
            Source::File(path) => {
                if !path.is_file() {
                    return Err(StreamError::InputNotFound(path.clone()));
                }
                info!("Reading data from {}", path.display());
                let file = File::open(path)?;
                // mpistat output is often several gzip members concatenated.
                Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
            }
            Source::Stdin => {
                info!("Reading data from stdin");
                Ok(Box::new(io::stdin().lock()))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
