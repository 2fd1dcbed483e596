//! Bit-plane substitution: the top `k` bits of every payload sample replace the low `k`
//! bits of the matching carrier sample, extraction shifts them back up.
//!
//! All arithmetic is done on `u8` with masks derived from a validated [`BitDepth`],
//! no floating point is involved in [`embed`] or [`extract`].

mod bit_depth;
pub mod codec_options;

use log::debug;

pub use bit_depth::{BitDepth, IntoBitDepth};
pub use codec_options::CodecOptions;

use crate::error::BitPlaneError;
use crate::media::{Bt709Normalizer, ChannelLayout, ColorNormalizer, Image};
use crate::result::Result;

/// channel layout an extracted image is delivered in
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    #[default]
    Rgb,
    Grayscale,
}

impl OutputMode {
    pub const fn layout(self) -> ChannelLayout {
        match self {
            OutputMode::Rgb => ChannelLayout::Rgb,
            OutputMode::Grayscale => ChannelLayout::Gray,
        }
    }
}

impl From<ChannelLayout> for OutputMode {
    fn from(layout: ChannelLayout) -> Self {
        match layout {
            ChannelLayout::Rgb => OutputMode::Rgb,
            ChannelLayout::Gray => OutputMode::Grayscale,
        }
    }
}

/// Embeds and extracts payload images.
///
/// The [`ColorNormalizer`] is only consulted when an extracted image has to change its
/// channel layout.
///
/// ## Example of usage
/// ```rust
/// use bitplane_core::codec::{BitPlaneCodec, OutputMode};
/// use bitplane_core::media::{ChannelLayout, Image};
///
/// let carrier = Image::filled(2, 2, ChannelLayout::Rgb, 200).expect("Cannot create carrier");
/// let payload = Image::filled(2, 2, ChannelLayout::Rgb, 100).expect("Cannot create payload");
/// let codec = BitPlaneCodec::new();
///
/// let stego = codec.embed(&carrier, &payload, 4).expect("Cannot embed payload");
/// assert!(stego.samples().iter().all(|&s| s == 198));
///
/// let extracted = codec.extract(&stego, 4, OutputMode::Rgb).expect("Cannot extract payload");
/// assert!(extracted.samples().iter().all(|&s| s == 96));
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitPlaneCodec<N = Bt709Normalizer> {
    normalizer: N,
}

impl BitPlaneCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: ColorNormalizer> BitPlaneCodec<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// Hides the top `k` bits of `payload` in the low `k` bits of `carrier`.
    ///
    /// Both images must have the same shape, otherwise [`BitPlaneError::ShapeMismatch`] is
    /// returned.
    /// The high `8 - k` bits of every result sample are the carrier's, with `k = 8` the result
    /// equals the payload.
    pub fn embed(&self, carrier: &Image, payload: &Image, k: impl IntoBitDepth) -> Result<Image> {
        let k = k.into_bit_depth()?;
        if carrier.shape() != payload.shape() {
            return Err(BitPlaneError::ShapeMismatch {
                left: carrier.shape(),
                right: payload.shape(),
            });
        }
        debug!("embedding {} payload with {k} bit(s) per sample", payload.shape());

        let clear_mask = k.clear_mask();
        let payload_mask = k.payload_mask();
        let shift = k.carrier_bits();
        let samples = carrier
            .samples()
            .iter()
            .zip(payload.samples())
            .map(|(&c, &p)| (c & clear_mask) | ((p >> shift) & payload_mask))
            .collect();

        Image::new(carrier.width(), carrier.height(), carrier.layout(), samples)
    }

    /// Recovers the payload bits from the low `k` bits of `stego` and moves them back to the top.
    ///
    /// The low `8 - k` bits of every sample are zero before any layout conversion.
    /// If `mode` asks for a different layout than the stego image has, the result is converted
    /// once by the normalizer.
    pub fn extract(&self, stego: &Image, k: impl IntoBitDepth, mode: OutputMode) -> Result<Image> {
        let k = k.into_bit_depth()?;
        debug!("extracting {k} bit(s) per sample from {}", stego.shape());

        let mask = k.payload_mask();
        let shift = k.carrier_bits();
        let extracted = stego.map_samples(|s| (s & mask) << shift);

        if extracted.layout() == mode.layout() {
            Ok(extracted)
        } else {
            self.normalizer.normalize(&extracted, mode.layout())
        }
    }
}

/// [`BitPlaneCodec::embed`] with the default normalizer
pub fn embed(carrier: &Image, payload: &Image, k: impl IntoBitDepth) -> Result<Image> {
    BitPlaneCodec::new().embed(carrier, payload, k)
}

/// [`BitPlaneCodec::extract`] with the default normalizer
pub fn extract(stego: &Image, k: impl IntoBitDepth, mode: OutputMode) -> Result<Image> {
    BitPlaneCodec::new().extract(stego, k, mode)
}
