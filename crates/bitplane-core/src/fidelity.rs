//! Error metrics between two images and the quality tiers derived from them.

use std::fmt;

use crate::codec::BitDepth;
use crate::error::BitPlaneError;
use crate::media::Image;
use crate::result::Result;

/// Per sample error between two images, on samples normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// mean squared error, never negative
    pub mse: f64,
    /// peak signal to noise ratio in dB with a peak of `1.0`, infinite for identical images
    pub psnr: f64,
}

impl Metrics {
    pub fn from_mse(mse: f64) -> Self {
        let psnr = if mse == 0.0 {
            f64::INFINITY
        } else {
            20.0 * (1.0 / mse.sqrt()).log10()
        };

        Self { mse, psnr }
    }

    /// true if both images were bit for bit equal
    pub fn is_identical(&self) -> bool {
        self.mse == 0.0
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MSE: {:.4}, PSNR: {:.4}", self.mse, self.psnr)
    }
}

/// Computes MSE and PSNR between two images of identical shape.
///
/// ```rust
/// use bitplane_core::fidelity::compare;
/// use bitplane_core::media::{ChannelLayout, Image};
///
/// let a = Image::filled(2, 2, ChannelLayout::Gray, 0).unwrap();
/// let b = Image::filled(2, 2, ChannelLayout::Gray, 255).unwrap();
///
/// let metrics = compare(&a, &b).unwrap();
/// assert_eq!(metrics.mse, 1.0);
/// assert_eq!(metrics.psnr, 0.0);
/// assert!(compare(&a, &a).unwrap().psnr.is_infinite());
/// ```
pub fn compare(a: &Image, b: &Image) -> Result<Metrics> {
    if a.shape() != b.shape() {
        return Err(BitPlaneError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let sum: f64 = a
        .samples()
        .iter()
        .zip(b.samples())
        .map(|(&x, &y)| {
            let d = f64::from(x) / 255.0 - f64::from(y) / 255.0;
            d * d
        })
        .sum();

    Ok(Metrics::from_mse(sum / a.samples().len() as f64))
}

/// What a quality judgement is based on, either the bit depth used or a measured PSNR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QualityBasis {
    BitDepth(BitDepth),
    Psnr(f64),
}

impl From<BitDepth> for QualityBasis {
    fn from(k: BitDepth) -> Self {
        QualityBasis::BitDepth(k)
    }
}

impl From<Metrics> for QualityBasis {
    fn from(metrics: Metrics) -> Self {
        QualityBasis::Psnr(metrics.psnr)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityLabel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl QualityLabel {
    /// one line explanation of the label, worded for the basis it was derived from
    pub fn describe(self, basis: &QualityBasis) -> &'static str {
        match (basis, self) {
            (QualityBasis::BitDepth(_), QualityLabel::Excellent) => {
                "enough bits were used for an almost perfect recovery"
            }
            (QualityBasis::BitDepth(_), QualityLabel::Good) => {
                "a good amount of detail can be recovered"
            }
            (QualityBasis::BitDepth(_), QualityLabel::Fair) => {
                "quality is limited, but the image is recognizable"
            }
            (QualityBasis::BitDepth(_), QualityLabel::Poor) => {
                "very few bits were used, the recovered image quality is poor"
            }
            (QualityBasis::Psnr(_), QualityLabel::Excellent) => {
                "the image is practically identical to the original"
            }
            (QualityBasis::Psnr(_), QualityLabel::Good) => {
                "there are minor but acceptable differences"
            }
            (QualityBasis::Psnr(_), QualityLabel::Fair) => {
                "there are noticeable differences, but the image is recognizable"
            }
            (QualityBasis::Psnr(_), QualityLabel::Poor) => {
                "the image differs significantly from the original"
            }
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityLabel::Excellent => "Excellent",
            QualityLabel::Good => "Good",
            QualityLabel::Fair => "Fair",
            QualityLabel::Poor => "Poor",
        };
        write!(f, "{label}")
    }
}

/// Maps a bit depth or a PSNR onto a quality tier.
///
/// - bit depth: `6..=8` Excellent, `4..=5` Good, `2..=3` Fair, `1` Poor
/// - PSNR: above 40 Excellent, from 30 up to 40 Good, above 20 up to 30 Fair, otherwise Poor.
///   A PSNR of exactly 30 is Good, infinity is Excellent and NaN is Poor.
pub fn classify(basis: impl Into<QualityBasis>) -> QualityLabel {
    match basis.into() {
        QualityBasis::BitDepth(k) => match k.get() {
            6..=8 => QualityLabel::Excellent,
            4..=5 => QualityLabel::Good,
            2..=3 => QualityLabel::Fair,
            _ => QualityLabel::Poor,
        },
        QualityBasis::Psnr(psnr) if psnr > 40.0 => QualityLabel::Excellent,
        QualityBasis::Psnr(psnr) if psnr >= 30.0 => QualityLabel::Good,
        QualityBasis::Psnr(psnr) if psnr > 20.0 => QualityLabel::Fair,
        QualityBasis::Psnr(_) => QualityLabel::Poor,
    }
}
