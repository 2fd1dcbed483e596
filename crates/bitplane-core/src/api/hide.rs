use std::path::{Path, PathBuf};

use log::info;

use crate::codec::{BitDepth, BitPlaneCodec, CodecOptions};
use crate::fidelity::{classify, compare, Metrics, QualityBasis, QualityLabel};
use crate::media::{crop_to_common, io, Bt709Normalizer, ChannelLayout, ColorNormalizer};
use crate::{BitPlaneError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// what hiding did to the carrier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HideReport {
    /// distortion of the stego image compared to the (cropped) carrier
    pub metrics: Metrics,
    /// quality tier of the bit depth used
    pub quality: QualityLabel,
    pub bit_depth: BitDepth,
    /// dimensions of the stego image after cropping carrier and payload to a common size
    pub width: u32,
    pub height: u32,
}

#[derive(Default, Debug)]
pub struct HideApi {
    carrier: Option<PathBuf>,
    payload: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of payload bits per carrier sample, remember it for unveiling
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.options.bit_depth = bit_depth;
        self
    }

    /// The image that receives the payload, used readonly
    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    /// The image that gets hidden
    pub fn with_payload<A: AsRef<Path>>(mut self, payload: A) -> Self {
        self.payload = Some(payload.as_ref().to_path_buf());
        self
    }

    /// The stego image will be stored there as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Loads both images, brings them to RGB and to a common size,
    /// then hides the payload and saves the result.
    pub fn execute(self) -> Result<HideReport> {
        let Some(carrier) = self.carrier else {
            return Err(BitPlaneError::CarrierNotSet);
        };
        let Some(payload) = self.payload else {
            return Err(BitPlaneError::PayloadNotSet);
        };
        let Some(output) = self.output else {
            return Err(BitPlaneError::TargetNotSet);
        };

        let normalizer = Bt709Normalizer;
        let carrier = normalizer.normalize(&io::load(&carrier)?, ChannelLayout::Rgb)?;
        let payload = normalizer.normalize(&io::load(&payload)?, ChannelLayout::Rgb)?;
        let (carrier, payload) = crop_to_common(&carrier, &payload)?;

        let bit_depth = self.options.bit_depth;
        let stego =
            BitPlaneCodec::with_normalizer(normalizer).embed(&carrier, &payload, bit_depth)?;
        let metrics = compare(&carrier, &stego)?;
        let quality = classify(QualityBasis::BitDepth(bit_depth));

        io::save_png(&stego, &output)?;
        info!("hid payload with {bit_depth} bit(s) in {output:?}, carrier {metrics}");

        Ok(HideReport {
            metrics,
            quality,
            bit_depth,
            width: stego.width(),
            height: stego.height(),
        })
    }
}
