pub mod builder;
pub mod font;
pub mod hex_token;
pub mod layout;

pub use builder::{MemoryImage, MemoryImageBuilder};
pub use hex_token::HexToken;
pub use layout::FontLayout;
