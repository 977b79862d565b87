//! # Layer 0: Primitives
//!
//! Basic building blocks for the shape algebra:
//! - `coord.rs`: Coordinate model (`[T; N]`, `Scalar`).
//! - `op.rs`: Boolean combining operators (`Or`, `And`).

pub mod coord;
pub mod op;

// Re-export key types at this level
pub use coord::{Coord, Scalar};
pub use op::{And, BoolOp, Or};
