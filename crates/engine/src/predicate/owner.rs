use std::str::FromStr;

use mpifilter_record::{IdentityResolver, Record};

use crate::{ConfigError, FilterError, Matches};

/// A user or group, by number or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Id(u32),
    Name(String),
}

impl Identity {
    /// One side of a `user:group` spec. Empty means unconstrained.
    fn parse_side(side: &str, spec: &str) -> Result<Option<Self>, ConfigError> {
        if side.is_empty() {
            return Ok(None);
        }

        if !side.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Some(Identity::Name(side.to_owned())));
        }

        side.parse()
            .map(|id| Some(Identity::Id(id)))
            .map_err(|_| ConfigError::InvalidOwner {
                spec: spec.to_owned(),
                reason: "numeric id out of range",
            })
    }
}

/// Matches records owned by the given user and/or group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerFilter {
    user: Option<Identity>,
    group: Option<Identity>,
}

impl OwnerFilter {
    pub fn new(user: Option<Identity>, group: Option<Identity>) -> Result<Self, ConfigError> {
        if user.is_none() && group.is_none() {
            return Err(ConfigError::EmptyOwner);
        }
        Ok(Self { user, group })
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn group(&self) -> Option<&Identity> {
        self.group.as_ref()
    }
}

/// Parses `user:group`, `user:`, `:group` or a bare `user`.
impl FromStr for OwnerFilter {
    type Err = ConfigError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (user, group) = spec.split_once(':').unwrap_or((spec, ""));

        if group.contains(':') {
            return Err(ConfigError::InvalidOwner {
                spec: spec.to_owned(),
                reason: "expected at most one ':'",
            });
        }

        OwnerFilter::new(
            Identity::parse_side(user, spec)?,
            Identity::parse_side(group, spec)?,
        )
    }
}

impl Matches for OwnerFilter {
    fn matches<R>(&self, record: &Record<'_>, ids: &R) -> Result<bool, FilterError>
    where
        R: IdentityResolver + ?Sized,
    {
        // Both constraints must hold; stop before a name lookup that
        // cannot change the answer.
        if let Some(user) = &self.user {
            let hit = match user {
                Identity::Id(uid) => record.uid == *uid,
                Identity::Name(name) => record.user(ids)? == *name,
            };
            if !hit {
                return Ok(false);
            }
        }

        if let Some(group) = &self.group {
            let hit = match group {
                Identity::Id(gid) => record.gid == *gid,
                Identity::Name(name) => record.group(ids)? == *name,
            };
            if !hit {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
#[path = "owner_tests.rs"]
mod tests;
