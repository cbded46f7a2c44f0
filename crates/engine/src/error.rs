use mpifilter_record::{MalformedRecord, NoSuchIdentity};
use thiserror::Error;

/// Rejected filter arguments, reported before any input is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("owner filter must name a user, a group, or both")]
    EmptyOwner,

    #[error("invalid owner filter {spec:?}: {reason}")]
    InvalidOwner { spec: String, reason: &'static str },

    #[error("directory filter must not be empty")]
    EmptyDirectory,
}

/// A predicate could not decide on a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error(transparent)]
    Record(#[from] MalformedRecord),

    #[error(transparent)]
    Identity(#[from] NoSuchIdentity),
}
