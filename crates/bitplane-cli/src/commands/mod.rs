pub mod compare;
pub mod hide;
pub mod unveil;
