mod directory;
mod owner;

pub use directory::DirectoryFilter;
pub use owner::{Identity, OwnerFilter};

use mpifilter_record::{IdentityResolver, Record};

use crate::FilterError;

/// A yes/no test over one record.
pub trait Matches {
    fn matches<R>(&self, record: &Record<'_>, ids: &R) -> Result<bool, FilterError>
    where
        R: IdentityResolver + ?Sized;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Directory(DirectoryFilter),
    Owner(OwnerFilter),
}

impl Matches for Predicate {
    #[inline]
    fn matches<R>(&self, record: &Record<'_>, ids: &R) -> Result<bool, FilterError>
    where
        R: IdentityResolver + ?Sized,
    {
        match self {
            Predicate::Directory(dir) => dir.matches(record, ids),
            Predicate::Owner(owner) => owner.matches(record, ids),
        }
    }
}

impl From<DirectoryFilter> for Predicate {
    fn from(filter: DirectoryFilter) -> Self {
        Predicate::Directory(filter)
    }
}

impl From<OwnerFilter> for Predicate {
    fn from(filter: OwnerFilter) -> Self {
        Predicate::Owner(filter)
    }
}
