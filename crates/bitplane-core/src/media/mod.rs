pub mod color;
pub mod io;
mod types;

pub use color::{crop_to_common, Bt709Normalizer, ColorNormalizer};
pub use types::*;
