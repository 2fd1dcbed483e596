use crate::error::BitPlaneError;

pub type Result<T> = std::result::Result<T, BitPlaneError>;
