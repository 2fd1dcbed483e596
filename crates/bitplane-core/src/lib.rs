//! # Bitplane Core API
//!
//! Hides one image (the payload) inside another (the carrier) by replacing the `k` least
//! significant bits of every carrier sample with the `k` most significant bits of the payload,
//! and unveils an approximation of the payload again.
//!
//! The pure building blocks are
//! - [`embed`][embed] and [`extract`][extract] of the [`codec`] module
//! - [`compare`][compare] and [`classify`][classify] of the [`fidelity`] module
//!
//! while [`api`] and [`commands`] wire them up with file based image I/O.
//!
//! This is no cryptography. Nothing is encrypted, the bit planes are used in plain order,
//! and the bit depth is not recorded in the stego image.
//!
//! # Usage Examples
//!
//! ## Hide an image inside another one
//!
//! ```rust
//! use bitplane_core::{
//!     classify, compare, embed, extract, ChannelLayout, Image, OutputMode, QualityLabel,
//! };
//!
//! let carrier = Image::filled(2, 2, ChannelLayout::Rgb, 200).expect("Cannot create carrier");
//! let payload = Image::filled(2, 2, ChannelLayout::Rgb, 100).expect("Cannot create payload");
//!
//! let stego = embed(&carrier, &payload, 4).expect("Cannot hide payload");
//! let distortion = compare(&carrier, &stego).expect("Cannot compare");
//! assert!(distortion.psnr > 40.0);
//! assert_eq!(classify(distortion), QualityLabel::Excellent);
//!
//! let unveiled = extract(&stego, 4, OutputMode::Rgb).expect("Cannot unveil payload");
//! assert_eq!(unveiled.pixel(0, 0), &[96, 96, 96]);
//! ```
//!
//! ## Hide and unveil with files
//!
//! ```rust
//! use bitplane_core::{media::io, BitDepth, ChannelLayout, Image};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let payload = temp_dir.path().join("payload.png");
//! io::save_png(&Image::filled(8, 8, ChannelLayout::Rgb, 17).unwrap(), &carrier).unwrap();
//! io::save_png(&Image::filled(8, 8, ChannelLayout::Gray, 240).unwrap(), &payload).unwrap();
//!
//! bitplane_core::api::hide::prepare()
//!     .with_carrier(&carrier)
//!     .with_payload(&payload)
//!     .with_bit_depth(BitDepth::new(3).unwrap())
//!     .with_output(temp_dir.path().join("stego.png"))
//!     .execute()
//!     .expect("Failed to hide image");
//!
//! let unveiled = bitplane_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("stego.png"))
//!     .with_bit_depth(BitDepth::new(3).unwrap())
//!     .execute()
//!     .expect("Failed to unveil image");
//! assert!(unveiled.samples().iter().all(|&s| s == 224));
//! ```
//!
//! [embed]: ./codec/fn.embed.html
//! [extract]: ./codec/fn.extract.html
//! [compare]: ./fidelity/fn.compare.html
//! [classify]: ./fidelity/fn.classify.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod fidelity;
pub mod media;
pub mod result;

pub use crate::codec::{
    embed, extract, BitDepth, BitPlaneCodec, CodecOptions, IntoBitDepth, OutputMode,
};
pub use crate::error::BitPlaneError;
pub use crate::fidelity::{classify, compare, Metrics, QualityBasis, QualityLabel};
pub use crate::media::{ChannelLayout, ColorNormalizer, Image, Shape};
pub use crate::result::Result;
