use std::fmt;

use crate::memory_image::font::FONT_SPRITES;

// Where the interpreter's reserved area ends and ROM bytes begin.
pub const ROM_START: usize = 0x200;
pub const ADDRESS_SPACE_SIZE: usize = 0x1000;
// Extra padding past the address space before the program counter bytes.
pub const PADDING_TAIL: usize = 0x100 + 18;
pub const PROGRAM_COUNTER_OFFSET: usize = ADDRESS_SPACE_SIZE + PADDING_TAIL;
pub const PROGRAM_COUNTER_LEN: usize = 2;
pub const DEFAULT_PROGRAM_COUNTER: u16 = 0x0002;
pub const IMAGE_LEN: usize = 4407;

// The largest ROM whose padding before the program counter is non-negative.
pub const MAX_ROM_LEN: usize = PROGRAM_COUNTER_OFFSET - ROM_START;

const _: () = assert!(FONT_SPRITES.len() <= ROM_START);
const _: () = assert!(PROGRAM_COUNTER_OFFSET + PROGRAM_COUNTER_LEN <= IMAGE_LEN);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontLayout {
    // Font sprites occupy the start of the reserved area.
    #[default]
    Builtin,
    // The reserved area is all zeroes.
    None,
}

impl FontLayout {
    pub fn font_bytes(self) -> &'static [u8] {
        match self {
            FontLayout::Builtin => &FONT_SPRITES,
            FontLayout::None => &[],
        }
    }
}

impl fmt::Display for FontLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLayout::Builtin => write!(f, "built-in font"),
            FontLayout::None => write!(f, "no font"),
        }
    }
}
