use crate::models::file_entry::FileKind;
use std::fs::{self, FileType, Metadata};
use std::io;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Raw per-entry metadata as reported by the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStat {
    pub kind: FileKind,
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub blocks: u64,
    pub modified: SystemTime,
}

impl RawStat {
    pub fn from_metadata(md: &Metadata) -> Self {
        Self {
            kind: kind_of(md.file_type()),
            mode: md.mode(),
            nlink: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            size: md.len(),
            blocks: md.blocks(),
            modified: md.modified().unwrap_or(UNIX_EPOCH),
        }
    }
}

/// Source of non-dereferencing metadata snapshots.
pub trait MetadataProvider {
    /// Stats `path` without following a trailing symlink.
    fn stat(&self, path: &Path) -> io::Result<RawStat>;
}

/// [`MetadataProvider`] backed by `lstat(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMetadata;

impl MetadataProvider for SystemMetadata {
    fn stat(&self, path: &Path) -> io::Result<RawStat> {
        let md = fs::symlink_metadata(path)?;
        Ok(RawStat::from_metadata(&md))
    }
}

fn kind_of(ft: FileType) -> FileKind {
    if ft.is_symlink() {
        FileKind::Link
    } else if ft.is_dir() {
        FileKind::Dir
    } else if ft.is_file() {
        FileKind::File
    } else if ft.is_block_device() {
        FileKind::BlockDevice
    } else if ft.is_char_device() {
        FileKind::CharDevice
    } else if ft.is_fifo() {
        FileKind::Fifo
    } else if ft.is_socket() {
        FileKind::Socket
    } else {
        FileKind::Unknown
    }
}
