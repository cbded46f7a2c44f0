mod error;
mod field;
mod identity;
mod record;

pub use error::{MalformedRecord, NoSuchIdentity};
pub use field::{FIELD_COUNT, Field};
pub use identity::{CachedIdentity, FixedIdentity, IdentityResolver, SystemIdentity};
pub use record::Record;
