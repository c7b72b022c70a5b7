use std::iter;

use itertools::Itertools;
use log::info;

use crate::error::ImageError;
use crate::memory_image::hex_token::HexToken;
use crate::memory_image::layout::*;

pub struct MemoryImageBuilder {
    font_layout: FontLayout,
    program_counter: u16,
}

impl MemoryImageBuilder {
    pub fn new(font_layout: FontLayout) -> Self {
        Self { font_layout, program_counter: DEFAULT_PROGRAM_COUNTER }
    }

    pub fn with_program_counter(mut self, program_counter: u16) -> Self {
        self.program_counter = program_counter;
        self
    }

    pub fn font_layout(&self) -> FontLayout {
        self.font_layout
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn build(&self, rom: &[u8]) -> Result<MemoryImage, ImageError> {
        let mut tokens = Vec::with_capacity(IMAGE_LEN);

        let font = self.font_layout.font_bytes();
        tokens.extend(font.iter().copied().map(HexToken::new));
        tokens.resize(ROM_START, HexToken::ZERO);
        info!(target: "layout", "Reserved area 0x000..0x{ROM_START:03X} ({}, {} font bytes).",
            self.font_layout, font.len());

        tokens.extend(rom.iter().copied().map(HexToken::new));
        info!(target: "layout", "ROM 0x{ROM_START:03X}..0x{:03X} ({} bytes).", tokens.len(), rom.len());

        // The padding count depends on the current length, not on a fixed target address.
        let base = tokens.len();
        let padding = (ADDRESS_SPACE_SIZE + PADDING_TAIL).checked_sub(base)
            .ok_or(ImageError::CapacityExceeded { rom_len: rom.len(), max: MAX_ROM_LEN })?;
        pad_with_zeroes(&mut tokens, padding);
        info!(target: "layout", "Padding 0x{base:03X}..0x{:03X} ({padding} zeroes).", tokens.len());

        let program_counter_offset = tokens.len();
        tokens.extend(self.program_counter.to_le_bytes().map(HexToken::new));
        info!(target: "layout", "Program counter 0x{:04X} at 0x{program_counter_offset:03X}.",
            self.program_counter);

        tokens.resize(IMAGE_LEN, HexToken::ZERO);
        assert_eq!(tokens.len(), IMAGE_LEN);

        Ok(MemoryImage { tokens, program_counter_offset })
    }
}

impl Default for MemoryImageBuilder {
    fn default() -> Self {
        Self::new(FontLayout::default())
    }
}

fn pad_with_zeroes(tokens: &mut Vec<HexToken>, count: usize) {
    tokens.extend(iter::repeat_n(HexToken::ZERO, count));
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryImage {
    tokens: Vec<HexToken>,
    program_counter_offset: usize,
}

impl MemoryImage {
    // Parses newline-separated hex tokens, as written by to_text().
    pub fn parse(text: &str) -> Result<MemoryImage, ImageError> {
        let tokens = text.split('\n')
            .enumerate()
            .map(|(index, token)| token.parse::<HexToken>()
                .map_err(|_| ImageError::InvalidToken { line: index + 1, token: token.to_string() }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MemoryImage { tokens, program_counter_offset: PROGRAM_COUNTER_OFFSET })
    }

    pub fn tokens(&self) -> &[HexToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn program_counter_offset(&self) -> usize {
        self.program_counter_offset
    }

    pub fn program_counter(&self) -> Option<u16> {
        let start = self.program_counter_offset;
        match self.tokens.get(start..start.checked_add(PROGRAM_COUNTER_LEN)?)? {
            [low, high] => Some(u16::from_le_bytes([low.to_u8(), high.to_u8()])),
            _ => None,
        }
    }

    pub fn rom_region(&self, rom_len: usize) -> Option<Vec<u8>> {
        self.tokens.get(ROM_START..ROM_START.checked_add(rom_len)?)
            .map(|tokens| tokens.iter().map(|token| token.to_u8()).collect())
    }

    pub fn to_text(&self) -> String {
        self.tokens.iter().join("\n")
    }
}
