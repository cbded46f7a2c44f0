mod error;
mod filter_set;
mod predicate;

pub use error::{ConfigError, FilterError};
pub use filter_set::FilterSet;
pub use predicate::{DirectoryFilter, Identity, Matches, OwnerFilter, Predicate};
