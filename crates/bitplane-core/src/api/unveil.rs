use std::path::{Path, PathBuf};

use log::info;

use crate::codec::{BitDepth, BitPlaneCodec, CodecOptions, OutputMode};
use crate::media::{io, Bt709Normalizer, ChannelLayout, ColorNormalizer, Image};
use crate::{BitPlaneError, Result};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Must be the same bit depth the payload was hidden with
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.options.bit_depth = bit_depth;
        self
    }

    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.options.output_mode = output_mode;
        self
    }

    /// This is the stego image that contains the payload to be unveiled, only PNG is accepted
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The unveiled image will be stored there as PNG, without it the image is only returned
    pub fn into_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the recovered image
    pub fn execute(self) -> Result<Image> {
        let Some(secret_media) = self.secret_media else {
            return Err(BitPlaneError::SecretNotSet);
        };

        let normalizer = Bt709Normalizer;
        let stego = normalizer.normalize(&io::load_png(&secret_media)?, ChannelLayout::Rgb)?;
        let unveiled = BitPlaneCodec::with_normalizer(normalizer).extract(
            &stego,
            self.options.bit_depth,
            self.options.output_mode,
        )?;

        if let Some(output_file) = self.output_file {
            io::save_png(&unveiled, &output_file)?;
            info!(
                "unveiled {} image with {} bit(s) into {output_file:?}",
                unveiled.layout(),
                self.options.bit_depth
            );
        }

        Ok(unveiled)
    }
}
