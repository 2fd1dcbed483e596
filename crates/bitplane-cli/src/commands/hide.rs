use std::path::PathBuf;

use bitplane_core::{BitDepth, CodecOptions};
use clap::Args;

use crate::CliResult;

/// Hides a payload image in the least significant bits of a carrier image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image (PNG or JPEG), used readonly
    #[arg(short, long, value_name = "carrier image", required = true)]
    pub carrier: PathBuf,

    /// Image to hide (PNG or JPEG); carrier and payload are cropped to their common size
    #[arg(short, long, value_name = "payload image", required = true)]
    pub payload: PathBuf,

    /// Final stego image will be stored as PNG file
    #[arg(short = 'o', long = "out", value_name = "output image file", required = true)]
    pub write_to_file: PathBuf,

    /// Number of payload bits per color channel;
    /// more bits recover the payload better but are more visible
    #[arg(
        short,
        long,
        value_name = "bits",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=8)
    )]
    pub bits: u8,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let bit_depth = BitDepth::new(self.bits)?;
        let report = bitplane_core::commands::hide(
            &self.carrier,
            &self.payload,
            &self.write_to_file,
            CodecOptions::default().with_bit_depth(bit_depth),
        )?;

        println!(
            "Hid a {}x{} image using {bit_depth} bit(s) per channel into {}",
            report.width,
            report.height,
            self.write_to_file.display()
        );
        println!("Carrier quality metrics: {}", report.metrics);
        println!(
            "{}: {}",
            report.quality,
            report.quality.describe(&bit_depth.into())
        );
        println!("Remember the bit depth {bit_depth}, it is needed to unveil the image again.");

        Ok(())
    }
}
