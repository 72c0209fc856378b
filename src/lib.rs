pub mod core;
pub mod models;
pub mod services;

pub use crate::core::errors::{Error, Result};
pub use models::file_entry::{Entry, FileKind};
pub use models::options::ListingOptions;
pub use services::fs::listing::{collect, EntryCollector};
pub use services::render::render;
