use super::{BitDepth, OutputMode};

/// Codec configuration shared by the hide and unveil flows.
///
/// The same `bit_depth` has to be used on both sides, it is not recorded in the stego image.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Number of payload bits stored in every carrier sample.
    /// More bits recover the payload more faithfully but distort the carrier more visibly.
    pub bit_depth: BitDepth,

    /// Channel layout of extracted images
    pub output_mode: OutputMode,
}

impl CodecOptions {
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }
}
