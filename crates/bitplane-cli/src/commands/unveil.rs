use std::path::PathBuf;

use bitplane_core::{BitDepth, CodecOptions, OutputMode};
use clap::{Args, ValueEnum};

use crate::CliResult;

/// Color mode of the unveiled image
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Color (RGB)
    Rgb,
    /// Grayscale
    Gray,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Rgb => OutputMode::Rgb,
            Mode::Gray => OutputMode::Grayscale,
        }
    }
}

/// Unveils a payload image from a stego image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Stego PNG image that contains the hidden image
    #[arg(short = 'i', long = "in", value_name = "stego image", required = true)]
    pub media: PathBuf,

    /// Unveiled image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file", required = true)]
    pub output_file: PathBuf,

    /// Number of bits per color channel, must match EXACTLY the number used for hiding
    #[arg(
        short,
        long,
        value_name = "bits",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    pub bits: u8,

    /// Color mode of the unveiled image
    #[arg(short, long, value_enum, default_value_t = Mode::Rgb)]
    pub mode: Mode,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let options = CodecOptions::default()
            .with_bit_depth(BitDepth::new(self.bits)?)
            .with_output_mode(self.mode.into());
        bitplane_core::commands::unveil(&self.media, &self.output_file, options)?;

        println!(
            "Unveiled image using {} bit(s) into {}",
            self.bits,
            self.output_file.display()
        );

        Ok(())
    }
}
