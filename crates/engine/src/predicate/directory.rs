use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use mpifilter_record::{IdentityResolver, Record};

use crate::{ConfigError, FilterError, Matches};

/// Matches records at or below `directory`.
///
/// Base64 encodes in 3-byte groups, so every path inside `directory`
/// encodes to a string beginning with the common prefix of
/// `b64(directory)` and `b64(directory + "/")`. Comparing that prefix
/// against the still-encoded column rejects most records without decoding
/// them. Survivors are decided exactly on the decoded path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFilter {
    directory: PathBuf,
    base64_prefix: String,
}

impl DirectoryFilter {
    pub fn new(directory: &str) -> Result<Self, ConfigError> {
        if directory.is_empty() {
            return Err(ConfigError::EmptyDirectory);
        }

        // `Path::starts_with` ignores repeated separators and `.`, so the
        // prefix must be built from the same component form.
        let directory: PathBuf = Path::new(directory).components().collect();
        let with_sep = {
            let text = directory.to_string_lossy();
            if text.ends_with('/') {
                text.into_owned()
            } else {
                format!("{text}/")
            }
        };
        let without_sep = &with_sep[..with_sep.len() - 1];

        let mut base64_prefix = STANDARD.encode(with_sep.as_bytes());
        let other = STANDARD.encode(without_sep.as_bytes());
        base64_prefix.truncate(common_prefix_len(base64_prefix.as_bytes(), other.as_bytes()));

        Ok(Self {
            directory,
            base64_prefix,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn base64_prefix(&self) -> &str {
        &self.base64_prefix
    }

    /// Cheap pre-filter on the encoded path. Never false for a record that
    /// `matches` would accept.
    #[inline]
    pub fn may_contain(&self, record: &Record<'_>) -> bool {
        record.encoded_path().starts_with(&self.base64_prefix)
    }
}

// Base64 output is ASCII, so a byte index is always a char boundary.
fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl Matches for DirectoryFilter {
    fn matches<R>(&self, record: &Record<'_>, _ids: &R) -> Result<bool, FilterError>
    where
        R: IdentityResolver + ?Sized,
    {
        if !self.may_contain(record) {
            return Ok(false);
        }

        // Component-wise, so `/foo` is not an ancestor of `/foobar`.
        Ok(record.path()?.starts_with(&self.directory))
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
