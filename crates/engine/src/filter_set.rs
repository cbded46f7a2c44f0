use log::debug;
use mpifilter_record::{IdentityResolver, Record};
use smallvec::SmallVec;

use crate::{ConfigError, DirectoryFilter, FilterError, Matches, OwnerFilter, Predicate};

/// Any-of combination of predicates.
///
/// Predicates run in insertion order and evaluation stops at the first
/// match. With no predicates, nothing matches.
pub struct FilterSet<R> {
    predicates: SmallVec<[Predicate; 4]>,
    ids: R,
}

impl<R: IdentityResolver> FilterSet<R> {
    pub fn new(ids: R) -> Self {
        Self {
            predicates: SmallVec::new(),
            ids,
        }
    }

    /// Build from command-line style arguments: one directory filter per
    /// directory, then one owner filter per `user:group` spec.
    pub fn from_args<D, O>(directories: D, owners: O, ids: R) -> Result<Self, ConfigError>
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        let mut set = Self::new(ids);

        for dir in directories {
            let filter = DirectoryFilter::new(dir.as_ref())?;
            debug!(
                "directory filter {} (base64 prefix {:?})",
                filter.directory().display(),
                filter.base64_prefix()
            );
            set.push(filter);
        }

        for spec in owners {
            let filter: OwnerFilter = spec.as_ref().parse()?;
            debug!("owner filter {filter:?}");
            set.push(filter);
        }

        Ok(set)
    }

    pub fn push(&mut self, predicate: impl Into<Predicate>) {
        self.predicates.push(predicate.into());
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, record: &Record<'_>) -> Result<bool, FilterError> {
        for predicate in &self.predicates {
            if predicate.matches(record, &self.ids)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
#[path = "filter_set_tests.rs"]
mod tests;
