extern crate rom2mem;

use std::fs;
use std::path::Path;

use structopt::StructOpt;

use rom2mem::config::{Config, Opt};
use rom2mem::converter;
use rom2mem::error::ImageError;
use rom2mem::memory_image::MemoryImage;

fn config(rom_path: &Path, output_path: &Path, extra: &[&str]) -> Config {
    let mut args = vec![
        "rom2mem".to_string(),
        rom_path.display().to_string(),
        output_path.display().to_string(),
    ];
    args.extend(extra.iter().map(|arg| arg.to_string()));

    let opt = Opt::from_iter_safe(args).expect("valid arguments");
    Config::new(&opt).expect("both paths given")
}

#[test]
fn two_byte_rom_with_font() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let rom_path = dir.path().join("clear.ch8");
    let output_path = dir.path().join("clear.mem");
    fs::write(&rom_path, [0x00u8, 0xE0]).unwrap();

    converter::convert(&config(&rom_path, &output_path, &[])).unwrap();

    let text = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 4407);
    assert_eq!(lines[0], "f0");
    assert_eq!(lines[512], "00");
    assert_eq!(lines[513], "e0");
    assert_eq!(lines[4370], "02");
    assert_eq!(lines[4371], "00");
    assert_eq!(lines[4406], "00");
    assert!(!text.ends_with('\n'));
}

#[test]
fn empty_rom_without_font() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let rom_path = dir.path().join("empty.ch8");
    let output_path = dir.path().join("empty.mem");
    fs::write(&rom_path, b"").unwrap();

    converter::convert(&config(&rom_path, &output_path, &["--no-font"])).unwrap();

    let text = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 4407);
    assert!(lines[..512].iter().all(|&line| line == "00"));
    assert_eq!(lines[4370], "02");
    assert_eq!(lines[4371], "00");
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let rom_path = dir.path().join("pong.ch8");
    let first_path = dir.path().join("first.mem");
    let second_path = dir.path().join("second.mem");
    let rom: Vec<u8> = (0..=255).cycle().take(700).collect();
    fs::write(&rom_path, &rom).unwrap();

    converter::convert(&config(&rom_path, &first_path, &[])).unwrap();
    converter::convert(&config(&rom_path, &second_path, &[])).unwrap();

    assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
}

#[test]
fn written_image_decodes_to_rom() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let rom_path = dir.path().join("maze.ch8");
    let output_path = dir.path().join("maze.mem");
    let rom = [0xA2u8, 0x1E, 0xC2, 0x01, 0x32, 0x01, 0xA2, 0x1A];
    fs::write(&rom_path, rom).unwrap();

    converter::convert(&config(&rom_path, &output_path, &["--override-program-counter", "0x200"])).unwrap();

    let image = MemoryImage::parse(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(image.rom_region(rom.len()), Some(rom.to_vec()));
    assert_eq!(image.program_counter(), Some(0x200));
}

#[test]
fn missing_rom_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let rom_path = dir.path().join("missing.ch8");
    let output_path = dir.path().join("missing.mem");

    let result = converter::convert(&config(&rom_path, &output_path, &[]));

    assert!(matches!(result, Err(ImageError::Io { ref path, .. }) if path == &rom_path));
    assert!(!output_path.exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let rom_path = dir.path().join("game.ch8");
    let output_path = dir.path().join("no_such_dir").join("game.mem");
    fs::write(&rom_path, [0x12u8, 0x00]).unwrap();

    let result = converter::convert(&config(&rom_path, &output_path, &[]));

    assert!(matches!(result, Err(ImageError::Io { ref path, .. }) if path == &output_path));
}

#[test]
fn oversized_rom_writes_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let rom_path = dir.path().join("huge.ch8");
    let output_path = dir.path().join("huge.mem");
    fs::write(&rom_path, vec![0xFFu8; 4000]).unwrap();

    let result = converter::convert(&config(&rom_path, &output_path, &[]));

    assert!(matches!(result, Err(ImageError::CapacityExceeded { rom_len: 4000, max: 3858 })));
    assert!(!output_path.exists());
}
