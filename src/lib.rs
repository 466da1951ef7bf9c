#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod point;
pub mod render;
mod r#type;

pub use error::KdIndexError;
pub use point::KdPoint;
pub use r#type::DeltaNum;
