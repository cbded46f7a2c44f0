use std::path::PathBuf;
use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};

use crate::{FIELD_COUNT, Field, IdentityResolver, MalformedRecord, NoSuchIdentity};

/// One mpistat line, decoded just enough to be filtered.
///
/// Scalars are parsed up front. The path stays base64 encoded and owner
/// names are looked up only when asked for, on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    encoded_path: &'a str,
    pub size: u64,
    pub uid: u32,
    pub gid: u32,
    pub atime: DateTime<Utc>,
    pub mtime: DateTime<Utc>,
    pub ctime: DateTime<Utc>,
    /// Raw mode column, uninterpreted
    pub mode: &'a str,
    pub inode_id: u64,
    pub hardlinks: u64,
    pub dev_id: u64,
}

impl<'a> Record<'a> {
    /// Decode one line. A trailing `\n` or `\r\n` is ignored.
    pub fn decode(line: &'a [u8]) -> Result<Self, MalformedRecord> {
        let line = strip_terminator(line);

        let mut columns: [&[u8]; FIELD_COUNT] = [&[]; FIELD_COUNT];
        let mut found = 0;
        for column in line.split(|&b| b == b'\t') {
            if let Some(slot) = columns.get_mut(found) {
                *slot = column;
            }
            found += 1;
        }

        if found != FIELD_COUNT {
            return Err(MalformedRecord::FieldCount { found });
        }

        let [
            path,
            size,
            uid,
            gid,
            atime,
            mtime,
            ctime,
            mode,
            inode_id,
            hardlinks,
            dev_id,
        ] = columns;

        Ok(Record {
            encoded_path: text(Field::Path, path)?,
            size: unsigned(Field::Size, size)?,
            uid: unsigned(Field::Uid, uid)?,
            gid: unsigned(Field::Gid, gid)?,
            atime: timestamp(Field::Atime, atime)?,
            mtime: timestamp(Field::Mtime, mtime)?,
            ctime: timestamp(Field::Ctime, ctime)?,
            mode: text(Field::Mode, mode)?,
            inode_id: unsigned(Field::InodeId, inode_id)?,
            hardlinks: unsigned(Field::Hardlinks, hardlinks)?,
            dev_id: unsigned(Field::DevId, dev_id)?,
        })
    }

    /// The path column exactly as it appears in the input.
    #[inline]
    pub fn encoded_path(&self) -> &'a str {
        self.encoded_path
    }

    /// Base64-decode the path column.
    pub fn path(&self) -> Result<PathBuf, MalformedRecord> {
        let bytes = STANDARD.decode(self.encoded_path)?;
        let path = String::from_utf8(bytes).map_err(|_| MalformedRecord::PathNotUtf8)?;
        Ok(PathBuf::from(path))
    }

    /// Owner's user name, resolved from `uid`.
    pub fn user<R>(&self, ids: &R) -> Result<String, NoSuchIdentity>
    where
        R: IdentityResolver + ?Sized,
    {
        ids.user_name(self.uid)
    }

    /// Owner's group name, resolved from `gid`.
    pub fn group<R>(&self, ids: &R) -> Result<String, NoSuchIdentity>
    where
        R: IdentityResolver + ?Sized,
    {
        ids.group_name(self.gid)
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => line,
    }
}

fn text(field: Field, raw: &[u8]) -> Result<&str, MalformedRecord> {
    std::str::from_utf8(raw).map_err(|_| MalformedRecord::NotUtf8 { field })
}

fn unsigned<T: FromStr>(field: Field, raw: &[u8]) -> Result<T, MalformedRecord> {
    let value = text(field, raw)?;
    value.parse().map_err(|_| MalformedRecord::NotAnInteger {
        field,
        value: value.to_owned(),
    })
}

fn timestamp(field: Field, raw: &[u8]) -> Result<DateTime<Utc>, MalformedRecord> {
    let value = text(field, raw)?;
    value
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| MalformedRecord::BadTimestamp {
            field,
            value: value.to_owned(),
        })
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
