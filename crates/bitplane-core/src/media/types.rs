use std::fmt;

use crate::error::BitPlaneError;
use crate::result::Result;

/// how the color channels of a pixel are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// one luminance channel per pixel
    Gray,
    /// red, green and blue per pixel, interleaved
    Rgb,
}

impl ChannelLayout {
    pub const fn channels(self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::Rgb => 3,
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelLayout::Gray => write!(f, "grayscale"),
            ChannelLayout::Rgb => write!(f, "RGB"),
        }
    }
}

/// height, width and channel count of an image, what two images must share to be combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

/// An 8 bit raster image, the value type every codec operation reads and returns.
///
/// Samples are stored row by row with the channels of a pixel interleaved,
/// so the sample of channel `c` at `(x, y)` lives at `(y * width + x) * channels + c`.
///
/// ## Example of usage
/// ```rust
/// use bitplane_core::media::{ChannelLayout, Image};
///
/// let image = Image::from_fn(2, 2, ChannelLayout::Rgb, |x, y, c| (x + y) as u8 * 10 + c as u8)
///     .expect("Cannot create image");
///
/// assert_eq!(image.pixel(1, 1), &[20, 21, 22]);
/// assert_eq!(image.samples().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl Image {
    /// wraps the given samples, fails if the buffer does not match the dimensions
    pub fn new(width: u32, height: u32, layout: ChannelLayout, samples: Vec<u8>) -> Result<Self> {
        let expected = Self::sample_count(width, height, layout);
        if width == 0 || height == 0 || expected != Some(samples.len()) {
            return Err(BitPlaneError::InvalidDimensions {
                width,
                height,
                channels: layout.channels(),
                len: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    /// an image with every sample set to `value`
    pub fn filled(width: u32, height: u32, layout: ChannelLayout, value: u8) -> Result<Self> {
        let len = Self::sample_count(width, height, layout).unwrap_or(0);
        Self::new(width, height, layout, vec![value; len])
    }

    /// builds an image by asking `f` for every sample, with `(x, y, channel)` as arguments
    pub fn from_fn<F>(width: u32, height: u32, layout: ChannelLayout, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32, usize) -> u8,
    {
        let channels = layout.channels();
        let len = Self::sample_count(width, height, layout).unwrap_or(0);
        let mut samples = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    samples.push(f(x, y, c));
                }
            }
        }

        Self::new(width, height, layout, samples)
    }

    /// Takes samples of a wider integer type, as delivered by 16 bit sources,
    /// and rejects the first one that does not fit into 8 bits.
    pub fn from_wide_samples(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        samples: &[u16],
    ) -> Result<Self> {
        let samples = samples
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u8::try_from(value).map_err(|_| BitPlaneError::InvalidSampleRange { index, value })
            })
            .collect::<Result<Vec<u8>>>()?;

        Self::new(width, height, layout, samples)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    pub fn shape(&self) -> Shape {
        Shape {
            width: self.width,
            height: self.height,
            channels: self.channels(),
        }
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// all channels of the pixel at `(x, y)`
    ///
    /// # Panics
    /// if `(x, y)` lies outside of the image
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside of {}x{}",
            self.width,
            self.height
        );
        let channels = self.channels();
        let start = (y as usize * self.width as usize + x as usize) * channels;
        &self.samples[start..start + channels]
    }

    /// iterates over the pixels row by row, each item holds all channels of one pixel
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.channels())
    }

    /// keeps the top left `width` x `height` region, both must be within the current dimensions
    pub fn crop(&self, width: u32, height: u32) -> Result<Self> {
        if width > self.width || height > self.height {
            return Err(BitPlaneError::InvalidDimensions {
                width,
                height,
                channels: self.channels(),
                len: self.samples.len(),
            });
        }
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }

        let row_len = self.width as usize * self.channels();
        let keep = width as usize * self.channels();
        let samples = self
            .samples
            .chunks_exact(row_len)
            .take(height as usize)
            .flat_map(|row| &row[..keep])
            .copied()
            .collect();

        Self::new(width, height, self.layout, samples)
    }

    /// applies `f` to every sample, keeping dimensions and layout
    pub(crate) fn map_samples<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self {
            width: self.width,
            height: self.height,
            layout: self.layout,
            samples: self.samples.iter().map(|&s| f(s)).collect(),
        }
    }

    /// same image geometry with a different layout, the caller provides matching samples
    pub(crate) fn with_layout(&self, layout: ChannelLayout, samples: Vec<u8>) -> Result<Self> {
        Self::new(self.width, self.height, layout, samples)
    }

    fn sample_count(width: u32, height: u32, layout: ChannelLayout) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(layout.channels())
    }
}
