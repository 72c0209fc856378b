use crate::services::fs::identity::IdentityResolver;
use crate::services::fs::metadata::RawStat;
use time::{OffsetDateTime, UtcOffset};

const PERMISSION_CHARS: [char; 9] = ['r', 'w', 'x', 'r', 'w', 'x', 'r', 'w', 'x'];

/// One listed filesystem object.
///
/// Every field is derived once from a single [`RawStat`] snapshot; there are
/// no setters, so a listing stays consistent even if the directory changes
/// while it is being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    kind: FileKind,
    permissions: String,
    link_count: u64,
    owner: String,
    group: String,
    size: u64,
    blocks: u64,
    modified: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Link,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Unknown,
}

impl FileKind {
    /// The one-character type code shown ahead of the permission bits.
    pub fn symbol(&self) -> char {
        match self {
            FileKind::File => '-',
            FileKind::Dir => 'd',
            FileKind::Link => 'l',
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Fifo => 'p',
            FileKind::Socket => 's',
            FileKind::Unknown => '?',
        }
    }
}

impl Entry {
    /// Builds an entry from a metadata snapshot, resolving owner and group
    /// names through `identity`.
    pub fn from_stat(name: String, stat: &RawStat, identity: &dyn IdentityResolver) -> Self {
        Self {
            name,
            kind: stat.kind,
            permissions: permission_string(stat.mode),
            link_count: stat.nlink,
            owner: identity.user_name(stat.uid),
            group: identity.group_name(stat.gid),
            size: stat.size,
            blocks: stat.blocks,
            modified: to_local(OffsetDateTime::from(stat.modified)),
        }
    }

    /// Assembles an entry from already-resolved parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        kind: FileKind,
        mode: u32,
        link_count: u64,
        owner: impl Into<String>,
        group: impl Into<String>,
        size: u64,
        blocks: u64,
        modified: OffsetDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            permissions: permission_string(mode),
            link_count,
            owner: owner.into(),
            group: group.into(),
            size,
            blocks,
            modified,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Nine characters in `rwxrwxrwx` order, `-` where a bit is clear.
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    pub fn link_count(&self) -> u64 {
        self.link_count
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Allocated 512-byte blocks, summed into the `total` line.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    pub fn modified(&self) -> OffsetDateTime {
        self.modified
    }
}

/// Renders the lowest nine bits of `mode` as a symbolic permission string.
pub fn permission_string(mode: u32) -> String {
    PERMISSION_CHARS
        .iter()
        .enumerate()
        .map(|(i, &c)| if mode & (0o400 >> i) != 0 { c } else { '-' })
        .collect()
}

// Falls back to UTC when the local offset is unavailable (e.g. the process is
// already multi-threaded).
fn to_local(utc: OffsetDateTime) -> OffsetDateTime {
    match UtcOffset::local_offset_at(utc) {
        Ok(offset) => utc.to_offset(offset),
        Err(_) => utc,
    }
}
