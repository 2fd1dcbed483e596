//! Grayscale and RGB normalization, plus cropping of image pairs to a common size.
//!
//! The codec never converts colors on its own, whenever an extracted image has to change
//! its channel layout it goes through a [`ColorNormalizer`].

use log::debug;

use super::{ChannelLayout, Image};
use crate::result::Result;

/// Converts images between grayscale and RGB.
///
/// Implementors only decide how a single RGB pixel collapses into one luminance value,
/// replication of grayscale into RGB is the same for everyone.
pub trait ColorNormalizer {
    /// luminance of one RGB pixel
    fn luminance(&self, r: u8, g: u8, b: u8) -> u8;

    /// collapses RGB into one channel, grayscale images are returned as they are
    fn to_gray(&self, image: &Image) -> Result<Image> {
        match image.layout() {
            ChannelLayout::Gray => Ok(image.clone()),
            ChannelLayout::Rgb => {
                let samples = image
                    .pixels()
                    .map(|p| self.luminance(p[0], p[1], p[2]))
                    .collect();
                image.with_layout(ChannelLayout::Gray, samples)
            }
        }
    }

    /// replicates the single channel into three identical ones, RGB images are returned as they are
    fn to_rgb(&self, image: &Image) -> Result<Image> {
        match image.layout() {
            ChannelLayout::Rgb => Ok(image.clone()),
            ChannelLayout::Gray => {
                let samples = image.samples().iter().flat_map(|&s| [s, s, s]).collect();
                image.with_layout(ChannelLayout::Rgb, samples)
            }
        }
    }

    /// converts `image` into `layout` if it is not already there
    fn normalize(&self, image: &Image, layout: ChannelLayout) -> Result<Image> {
        match layout {
            ChannelLayout::Gray => self.to_gray(image),
            ChannelLayout::Rgb => self.to_rgb(image),
        }
    }
}

/// Luminance with the ITU-R BT.709 weights `0.2125 R + 0.7154 G + 0.0721 B`,
/// rounded to the next integer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bt709Normalizer;

impl ColorNormalizer for Bt709Normalizer {
    fn luminance(&self, r: u8, g: u8, b: u8) -> u8 {
        let y = 0.2125 * f64::from(r) + 0.7154 * f64::from(g) + 0.0721 * f64::from(b);
        y.round().clamp(0.0, 255.0) as u8
    }
}

/// Crops both images to the minimum of their heights and widths, anchored at the top left corner.
pub fn crop_to_common(a: &Image, b: &Image) -> Result<(Image, Image)> {
    let width = a.width().min(b.width());
    let height = a.height().min(b.height());
    debug!(
        "cropping {}x{} and {}x{} to {width}x{height}",
        a.width(),
        a.height(),
        b.width(),
        b.height()
    );

    Ok((a.crop(width, height)?, b.crop(width, height)?))
}
