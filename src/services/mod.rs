pub mod fs;
pub mod render;
