use std::path::PathBuf;

use bitplane_core::BitDepth;
use clap::Args;

use crate::CliResult;

/// Measures MSE and PSNR of an image against its original, for example an unveiled payload
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Original image
    #[arg(short, long, value_name = "reference image", required = true)]
    pub reference: PathBuf,

    /// Image to measure, converted to the color mode of the reference
    #[arg(short, long, value_name = "candidate image", required = true)]
    pub candidate: PathBuf,

    /// Judge the quality by this bit depth instead of the PSNR
    #[arg(short, long, value_name = "bits", value_parser = clap::value_parser!(u8).range(1..=8))]
    pub bits: Option<u8>,
}

impl CompareArgs {
    pub fn run(self) -> CliResult<()> {
        let bit_depth = self.bits.map(BitDepth::new).transpose()?;
        let report =
            bitplane_core::commands::evaluate(&self.reference, &self.candidate, bit_depth)?;

        println!("Quality metrics: {}", report.metrics);
        println!(
            "{}: {}",
            report.quality,
            report.quality.describe(&report.basis)
        );

        Ok(())
    }
}
