pub mod config;
pub mod converter;
pub mod error;
pub mod memory_image;
pub mod util;
