use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The directory being listed could not be opened or enumerated.
    #[error("cannot access '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Access {
            path: path.into(),
            source,
        }
    }
}
