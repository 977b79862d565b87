//! # Layer 2: Leaf Shapes
//!
//! Shapes whose membership comes straight from their own parameters.

pub mod circle;

pub use circle::{Circle, Radial};
