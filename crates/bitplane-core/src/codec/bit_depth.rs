use std::fmt;

use crate::error::BitPlaneError;
use crate::result::Result;

/// Number of bit planes (`k`) a payload occupies in the carrier, always within `1..=8`.
///
/// The depth is not stored in the stego image. Extracting with another depth than the one
/// used for embedding yields a garbled image and no error, keeping track of it is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    pub const MIN: BitDepth = BitDepth(1);
    pub const MAX: BitDepth = BitDepth(8);

    pub fn new(k: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&k) {
            Ok(Self(k))
        } else {
            Err(BitPlaneError::InvalidBitDepth(i64::from(k)))
        }
    }

    /// every valid depth, from 1 up to 8
    pub fn all() -> impl DoubleEndedIterator<Item = BitDepth> {
        (Self::MIN.0..=Self::MAX.0).map(BitDepth)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// zeroes the low `k` bits of a carrier sample, `0xFF << k` truncated to 8 bits
    pub const fn clear_mask(self) -> u8 {
        (0xFF_u16 << self.0) as u8
    }

    /// keeps the low `k` bits, `2^k - 1`
    pub const fn payload_mask(self) -> u8 {
        ((1_u16 << self.0) - 1) as u8
    }

    /// number of high bits of each carrier sample that survive embedding
    pub const fn carrier_bits(self) -> u8 {
        8 - self.0
    }

    /// largest difference between a payload sample and its extracted counterpart
    pub const fn max_sample_error(self) -> u8 {
        ((1_u16 << self.carrier_bits()) - 1) as u8
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BitDepth> for u8 {
    fn from(k: BitDepth) -> Self {
        k.0
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = BitPlaneError;

    fn try_from(k: u8) -> Result<Self> {
        Self::new(k)
    }
}

/// Anything that can be turned into a [`BitDepth`], validated at the call.
///
/// Lets the codec operations take a plain integer as well as an already checked depth,
/// an integer outside of `1..=8` fails with [`BitPlaneError::InvalidBitDepth`].
pub trait IntoBitDepth {
    fn into_bit_depth(self) -> Result<BitDepth>;
}

impl IntoBitDepth for BitDepth {
    fn into_bit_depth(self) -> Result<BitDepth> {
        Ok(self)
    }
}

macro_rules! impl_into_bit_depth {
    ($($t:ty),*) => {
        $(
            impl IntoBitDepth for $t {
                fn into_bit_depth(self) -> Result<BitDepth> {
                    u8::try_from(self)
                        .map_err(|_| BitPlaneError::InvalidBitDepth(self as i64))
                        .and_then(BitDepth::new)
                }
            }
        )*
    };
}

impl_into_bit_depth!(u8, u16, u32, usize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_depths_outside_of_one_to_eight() {
        for k in [0, 9, 255] {
            match BitDepth::new(k).err() {
                Some(BitPlaneError::InvalidBitDepth(v)) => assert_eq!(v, i64::from(k)),
                other => panic!("unexpected result {other:?} for {k}"),
            }
        }
    }

    #[test]
    fn should_reject_negative_and_huge_integers() {
        assert!((-1_i32).into_bit_depth().is_err());
        assert!(300_u32.into_bit_depth().is_err());
        assert_eq!(4_usize.into_bit_depth().unwrap().get(), 4);
    }

    #[test]
    fn masks_should_match_the_bit_arithmetic() {
        for k in BitDepth::all() {
            let bits = u32::from(k.get());
            assert_eq!(u32::from(k.clear_mask()), 256 - 2_u32.pow(bits), "clear mask for {k}");
            assert_eq!(u32::from(k.payload_mask()), 2_u32.pow(bits) - 1, "payload mask for {k}");
            assert_eq!(k.clear_mask() & k.payload_mask(), 0);
            assert_eq!(k.clear_mask() | k.payload_mask(), 0xFF);
        }
    }

    #[test]
    fn eight_bits_should_clear_the_whole_carrier_sample() {
        let k = BitDepth::MAX;

        assert_eq!(k.clear_mask(), 0);
        assert_eq!(k.payload_mask(), 255);
        assert_eq!(k.carrier_bits(), 0);
        assert_eq!(k.max_sample_error(), 0);
    }

    #[test]
    fn one_bit_should_leave_seven_carrier_bits() {
        let k = BitDepth::MIN;

        assert_eq!(k.clear_mask(), 0b1111_1110);
        assert_eq!(k.payload_mask(), 0b0000_0001);
        assert_eq!(k.carrier_bits(), 7);
        assert_eq!(k.max_sample_error(), 127);
    }

    #[test]
    fn all_should_yield_eight_ascending_depths() {
        let all: Vec<u8> = BitDepth::all().map(u8::from).collect();

        assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
