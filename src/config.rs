use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::error::ImageError;
use crate::memory_image::layout::DEFAULT_PROGRAM_COUNTER;
use crate::memory_image::{FontLayout, MemoryImageBuilder};

pub struct Config {
    rom_path: PathBuf,
    output_path: PathBuf,
    font_layout: FontLayout,
    program_counter: u16,
}

impl Config {
    pub fn new(opt: &Opt) -> Result<Config, ImageError> {
        let (Some(rom_path), Some(output_path)) = (&opt.rom_path, &opt.output_path) else {
            return Err(ImageError::InsufficientArguments);
        };

        let font_layout = if opt.no_font { FontLayout::None } else { FontLayout::Builtin };

        Ok(Config {
            rom_path: rom_path.clone(),
            output_path: output_path.clone(),
            font_layout,
            program_counter: opt.override_program_counter.unwrap_or(DEFAULT_PROGRAM_COUNTER),
        })
    }

    pub fn rom_path(&self) -> &Path {
        &self.rom_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn font_layout(&self) -> FontLayout {
        self.font_layout
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn builder(&self) -> MemoryImageBuilder {
        MemoryImageBuilder::new(self.font_layout)
            .with_program_counter(self.program_counter)
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "ROM2MEM", about = "Converts a CHIP-8 ROM into a hex memory image.")]
pub struct Opt {
    #[structopt(name = "ROM", parse(from_os_str))]
    pub rom_path: Option<PathBuf>,

    #[structopt(name = "OUTPUT", parse(from_os_str))]
    pub output_path: Option<PathBuf>,

    // Anything after the two paths is accepted and ignored.
    #[structopt(name = "IGNORED", hidden = true)]
    pub ignored: Vec<String>,

    // Leave the reserved area zeroed instead of loading the font sprites.
    #[structopt(long)]
    pub no_font: bool,

    #[structopt(long, parse(try_from_str = parse_program_counter))]
    pub override_program_counter: Option<u16>,

    #[structopt(long)]
    pub log_layout: bool,
}

// Accepts decimal or 0x-prefixed hex.
pub fn parse_program_counter(value: &str) -> Result<u16, String> {
    let result = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse::<u16>(),
    };

    result.map_err(|err| format!("Invalid program counter '{value}': {err}"))
}
