use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::info;

use crate::config::Config;
use crate::error::ImageError;
use crate::memory_image::MemoryImage;

pub fn convert(config: &Config) -> Result<MemoryImage, ImageError> {
    let rom_path = config.rom_path();
    info!("Loading ROM '{}'.", rom_path.display());
    let rom = read_rom(rom_path)?;
    info!("ROM loaded ({} bytes).", rom.len());

    let image = config.builder().build(&rom)?;

    let output_path = config.output_path();
    write_image(output_path, &image)?;
    info!("Wrote {} tokens to '{}'.", image.len(), output_path.display());

    Ok(image)
}

pub fn read_rom(path: &Path) -> Result<Vec<u8>, ImageError> {
    let mut rom = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut rom))
        .map_err(|source| ImageError::Io { path: path.to_path_buf(), source })?;
    Ok(rom)
}

pub fn write_image(path: &Path, image: &MemoryImage) -> Result<(), ImageError> {
    File::create(path)
        .and_then(|mut file| file.write_all(image.to_text().as_bytes()))
        .map_err(|source| ImageError::Io { path: path.to_path_buf(), source })
}
