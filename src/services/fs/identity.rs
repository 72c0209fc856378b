use std::cell::RefCell;
use std::collections::HashMap;

/// Maps numeric owner/group ids to display names.
///
/// Lookups never fail: an id with no database entry is shown as its decimal
/// value.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> String;
    fn group_name(&self, gid: u32) -> String;
}

/// Resolves ids through the system user and group databases, caching each
/// answer for the lifetime of the resolver.
#[derive(Debug, Default)]
pub struct SystemIdentity {
    users: RefCell<HashMap<u32, String>>,
    groups: RefCell<HashMap<u32, String>>,
}

impl SystemIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> String {
        self.users
            .borrow_mut()
            .entry(uid)
            .or_insert_with(|| lookup_user(uid).unwrap_or_else(|| uid.to_string()))
            .clone()
    }

    fn group_name(&self, gid: u32) -> String {
        self.groups
            .borrow_mut()
            .entry(gid)
            .or_insert_with(|| lookup_group(gid).unwrap_or_else(|| gid.to_string()))
            .clone()
    }
}

/// Skips the databases entirely and prints raw ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericIdentity;

impl IdentityResolver for NumericIdentity {
    fn user_name(&self, uid: u32) -> String {
        uid.to_string()
    }

    fn group_name(&self, gid: u32) -> String {
        gid.to_string()
    }
}

fn lookup_user(uid: u32) -> Option<String> {
    uzers::get_user_by_uid(uid).map(|user| user.name().to_string_lossy().into_owned())
}

fn lookup_group(gid: u32) -> Option<String> {
    uzers::get_group_by_gid(gid).map(|group| group.name().to_string_lossy().into_owned())
}
