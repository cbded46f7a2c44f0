use std::cell::RefCell;

use hashbrown::HashMap;
use log::debug;

use crate::NoSuchIdentity;

/// Maps numeric owner ids to names.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> Result<String, NoSuchIdentity>;
    fn group_name(&self, gid: u32) -> Result<String, NoSuchIdentity>;
}

impl<R: IdentityResolver + ?Sized> IdentityResolver for &R {
    fn user_name(&self, uid: u32) -> Result<String, NoSuchIdentity> {
        (**self).user_name(uid)
    }

    fn group_name(&self, gid: u32) -> Result<String, NoSuchIdentity> {
        (**self).group_name(gid)
    }
}

/// The host's passwd and group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> Result<String, NoSuchIdentity> {
        uzers::get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
            .ok_or(NoSuchIdentity::User(uid))
    }

    fn group_name(&self, gid: u32) -> Result<String, NoSuchIdentity> {
        uzers::get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
            .ok_or(NoSuchIdentity::Group(gid))
    }
}

/// In-memory id table.
#[derive(Debug, Default, Clone)]
pub struct FixedIdentity {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl FixedIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, uid: u32, name: impl Into<String>) -> Self {
        self.users.insert(uid, name.into());
        self
    }

    pub fn with_group(mut self, gid: u32, name: impl Into<String>) -> Self {
        self.groups.insert(gid, name.into());
        self
    }
}

impl IdentityResolver for FixedIdentity {
    fn user_name(&self, uid: u32) -> Result<String, NoSuchIdentity> {
        self.users.get(&uid).cloned().ok_or(NoSuchIdentity::User(uid))
    }

    fn group_name(&self, gid: u32) -> Result<String, NoSuchIdentity> {
        self.groups.get(&gid).cloned().ok_or(NoSuchIdentity::Group(gid))
    }
}

type Answers = RefCell<HashMap<u32, Result<String, NoSuchIdentity>>>;

/// Remembers every answer of the wrapped resolver, misses included.
///
/// Inventories repeat a handful of owners millions of times, and each
/// database lookup is a libc call (possibly hitting NSS).
pub struct CachedIdentity<R> {
    inner: R,
    users: Answers,
    groups: Answers,
}

impl<R: IdentityResolver> CachedIdentity<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            users: RefCell::default(),
            groups: RefCell::default(),
        }
    }
}

fn remember<F>(answers: &Answers, id: u32, resolve: F) -> Result<String, NoSuchIdentity>
where
    F: FnOnce(u32) -> Result<String, NoSuchIdentity>,
{
    if let Some(hit) = answers.borrow().get(&id) {
        return hit.clone();
    }

    let answer = resolve(id);
    debug!("resolved id {id}: {answer:?}");
    answers.borrow_mut().insert(id, answer.clone());
    answer
}

impl<R: IdentityResolver> IdentityResolver for CachedIdentity<R> {
    fn user_name(&self, uid: u32) -> Result<String, NoSuchIdentity> {
        remember(&self.users, uid, |id| self.inner.user_name(id))
    }

    fn group_name(&self, gid: u32) -> Result<String, NoSuchIdentity> {
        remember(&self.groups, gid, |id| self.inner.group_name(id))
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
