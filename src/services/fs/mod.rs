pub mod identity;
pub mod listing;
pub mod metadata;
