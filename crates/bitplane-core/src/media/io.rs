//! Reading and writing [`Image`]s from and to image containers, based on the `image` crate.
//!
//! Anything decodable as PNG or JPEG is accepted as input, the result is always 8 bits per
//! sample. Output is always PNG, a lossy container would destroy the hidden bit planes.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::{DynamicImage, GenericImageView, GrayImage, ImageError, ImageFormat, RgbImage};
use log::{debug, error};

use super::{ChannelLayout, Image};
use crate::error::BitPlaneError;
use crate::result::Result;

/// Opens a PNG or JPEG file.
///
/// Grayscale sources (with or without alpha) become [`ChannelLayout::Gray`], everything else
/// becomes [`ChannelLayout::Rgb`]. Alpha is dropped and 16 bit sources are reduced to 8 bits.
pub fn load(file: impl AsRef<Path>) -> Result<Image> {
    open_as(file.as_ref(), &["png", "jpg", "jpeg"])
}

/// Opens a PNG file, same conversion rules as [`load`].
///
/// Stego images have to come through here, JPEG requantization wipes the low bit planes.
pub fn load_png(file: impl AsRef<Path>) -> Result<Image> {
    open_as(file.as_ref(), &["png"])
}

fn open_as(file: &Path, extensions: &[&str]) -> Result<Image> {
    let Some(ext) = file.extension().and_then(|e| e.to_str()) else {
        return Err(BitPlaneError::UnsupportedMedia);
    };
    if !extensions.contains(&ext.to_lowercase().as_str()) {
        return Err(BitPlaneError::UnsupportedMedia);
    }

    let img = image::open(file).map_err(|e| {
        error!("Error opening image {file:?}: {e}");
        match e {
            ImageError::IoError(source) => BitPlaneError::ReadError { source },
            _ => BitPlaneError::InvalidImageMedia,
        }
    })?;

    from_dynamic(img)
}

/// Decodes an in-memory PNG or JPEG, same conversion rules as [`load`].
pub fn decode(bytes: &[u8]) -> Result<Image> {
    let img = image::load_from_memory(bytes).map_err(|e| {
        error!("Error decoding image: {e}");
        BitPlaneError::InvalidImageMedia
    })?;

    from_dynamic(img)
}

/// Writes `image` as PNG file, any existing file is replaced.
pub fn save_png(image: &Image, file: impl AsRef<Path>) -> Result<()> {
    let file = file.as_ref();
    let f = File::create(file).map_err(|e| {
        error!("Error creating file {file:?}: {e}");
        BitPlaneError::WriteError { source: e }
    })?;
    let mut writer = BufWriter::new(f);
    write_png(image, &mut writer)?;

    writer
        .flush()
        .map_err(|source| BitPlaneError::WriteError { source })
}

/// Encodes `image` as PNG into memory.
pub fn encode_png(image: &Image) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    write_png(image, &mut buf)?;

    Ok(buf.into_inner())
}

fn write_png<W: Write + Seek>(image: &Image, writer: &mut W) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    let samples = image.samples().to_vec();
    let img = match image.layout() {
        ChannelLayout::Gray => {
            GrayImage::from_raw(width, height, samples).map(DynamicImage::ImageLuma8)
        }
        ChannelLayout::Rgb => {
            RgbImage::from_raw(width, height, samples).map(DynamicImage::ImageRgb8)
        }
    }
    .ok_or(BitPlaneError::ImageEncodingError)?;

    img.write_to(writer, ImageFormat::Png).map_err(|e| {
        error!("Error saving image: {e}");
        BitPlaneError::ImageEncodingError
    })
}

fn from_dynamic(img: DynamicImage) -> Result<Image> {
    let (width, height) = img.dimensions();
    let color = img.color();
    debug!("decoded {width}x{height} image with color type {color:?}");

    if color.has_color() {
        Image::new(width, height, ChannelLayout::Rgb, img.to_rgb8().into_raw())
    } else {
        Image::new(width, height, ChannelLayout::Gray, img.to_luma8().into_raw())
    }
}
