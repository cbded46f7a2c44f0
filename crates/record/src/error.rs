use thiserror::Error;

use crate::Field;

/// A line that cannot be read as an mpistat record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("expected {expected} tab-separated fields, found {found}", expected = crate::FIELD_COUNT)]
    FieldCount { found: usize },

    #[error("field `{field}` is not an unsigned integer: {value:?}")]
    NotAnInteger { field: Field, value: String },

    #[error("field `{field}` is not a valid epoch timestamp: {value:?}")]
    BadTimestamp { field: Field, value: String },

    #[error("field `{field}` is not valid UTF-8")]
    NotUtf8 { field: Field },

    #[error("path is not valid base64: {0}")]
    PathEncoding(#[from] base64::DecodeError),

    #[error("decoded path is not valid UTF-8")]
    PathNotUtf8,
}

/// A numeric id with no entry in the user or group database.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSuchIdentity {
    #[error("no user with uid {0}")]
    User(u32),

    #[error("no group with gid {0}")]
    Group(u32),
}
