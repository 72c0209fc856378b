use crate::core::errors::{Error, Result};
use crate::models::file_entry::Entry;
use crate::models::options::ListingOptions;
use crate::services::fs::identity::{IdentityResolver, SystemIdentity};
use crate::services::fs::metadata::{MetadataProvider, SystemMetadata};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Lists one directory into [`Entry`] records.
pub struct EntryCollector<M, I> {
    metadata: M,
    identity: I,
}

impl EntryCollector<SystemMetadata, SystemIdentity> {
    pub fn system() -> Self {
        Self::new(SystemMetadata, SystemIdentity::new())
    }
}

impl<M: MetadataProvider, I: IdentityResolver> EntryCollector<M, I> {
    pub fn new(metadata: M, identity: I) -> Self {
        Self { metadata, identity }
    }

    /// Enumerates `dir`, stats every retained name once, and returns entries
    /// in ascending byte order of their names (descending with `reverse`).
    ///
    /// Names that vanish between enumeration and stat are left out.
    pub fn collect(&self, dir: &Path, options: &ListingOptions) -> Result<Vec<Entry>> {
        let mut names = read_names(dir).map_err(|e| Error::access(dir, e))?;
        if options.show_hidden {
            // read_dir never yields the self and parent links.
            names.push(OsString::from("."));
            names.push(OsString::from(".."));
        } else {
            names.retain(|name| !is_hidden(name));
        }
        names.sort();

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(&name);
            match self.metadata.stat(&path) {
                Ok(stat) => {
                    entries.push(Entry::from_stat(os_str_to_string(&name), &stat, &self.identity));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!("{} disappeared before stat, skipping", path.display());
                }
                Err(e) => {
                    tracing::warn!("cannot stat {}: {}", path.display(), e);
                }
            }
        }

        if options.reverse {
            entries.reverse();
        }
        tracing::debug!("collected {} entries from {}", entries.len(), dir.display());
        Ok(entries)
    }
}

/// Lists `dir` with the system metadata and identity providers.
pub fn collect(dir: &Path, options: &ListingOptions) -> Result<Vec<Entry>> {
    EntryCollector::system().collect(dir, options)
}

fn read_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name());
    }
    Ok(names)
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
