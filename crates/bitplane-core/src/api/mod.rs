//! Builder style entry points for the three flows: hide a payload image in a carrier,
//! unveil it again and evaluate how close two images are.

pub mod evaluate;
pub mod hide;
pub mod unveil;
