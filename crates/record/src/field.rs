use std::fmt;

/// Number of tab-separated columns in one mpistat line.
pub const FIELD_COUNT: usize = 11;

/// Column of an mpistat line, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Path,
    Size,
    Uid,
    Gid,
    Atime,
    Mtime,
    Ctime,
    Mode,
    InodeId,
    Hardlinks,
    DevId,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Path => "path",
            Field::Size => "size",
            Field::Uid => "uid",
            Field::Gid => "gid",
            Field::Atime => "atime",
            Field::Mtime => "mtime",
            Field::Ctime => "ctime",
            Field::Mode => "mode",
            Field::InodeId => "inode_id",
            Field::Hardlinks => "hardlinks",
            Field::DevId => "dev_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
