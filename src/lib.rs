#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - trace: enables the `Traced` adapter and its `tracing` events

//! # shape-algebra
//!
//! Shapes as membership predicates, composed at compile time.
//!
//! A shape is not a data structure: it is anything that answers
//! "is point P inside?" for points of a fixed arity `N` over a fixed
//! coordinate type `T`. Shapes compose with union, intersection and
//! complement into new shapes, with no base class and no dynamic dispatch.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Coordinates ([T; N], Scalar), Operators (Or, And)              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Shape Contract                                          |
//! |  - Shape<T, N>, closures as shapes, assert_shape!                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Leaf Shapes                                             |
//! |  - Circle                                                         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Combinators                                             |
//! |  - Combined<Op, L, R>, combine / union / intersect, Complement    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Syntax                                                  |
//! |  - ShapeExt, union! / intersect!, shape!, #[derive(Shape)]        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Evaluating a composite recurses through its type: every node is a
//! concrete generic type, so a query on a composition tree compiles down
//! to the arithmetic of its leaves.
//!
//! ## Features
//!
//! - **Build-time contract**: operands that are not shapes, or that disagree
//!   on arity or coordinate type, are rejected by the compiler
//! - **Value ownership**: a composite owns its operands; nothing is shared
//! - **No runtime overhead**: no allocation, no vtables, `no_std` compatible
//!
//! ## Quick Start
//!
//! ```
//! use shape_algebra::prelude::*;
//!
//! let a = Circle::new(1.0, 0.0, 0.0);
//! let b = Circle::new(1.0, 10.0, 10.0);
//!
//! let either = union(a, b);
//! assert!(either.contains([1.0, 0.0]));
//! assert!(either.contains([10.0, 9.0]));
//! assert!(!either.contains([5.0, 5.0]));
//!
//! // The same with expression syntax.
//! let either = shape!(a | b);
//! assert!(either.contains([10.0, 11.0]));
//! ```

// Allow `::shape_algebra` to work inside the crate itself
extern crate self as shape_algebra;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Shape Contract
// =============================================================================
pub mod shape;

// =============================================================================
// Layer 2: Leaf Shapes
// =============================================================================
pub mod leaf;

// =============================================================================
// Layer 3: Combinators
// =============================================================================
pub mod combine;

#[cfg(feature = "trace")]
pub mod trace;

// =============================================================================
// Layer 4: Syntax (union!, intersect!)
// =============================================================================
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{And, BoolOp, Coord, Or, Scalar};
pub use shape::Shape;
pub use leaf::{Circle, Radial};
pub use combine::{
    combine, complement, intersect, union,
    Combined, Complement, Intersection, Union,
};
pub use combine::ext::ShapeExt;
#[cfg(feature = "trace")]
pub use trace::Traced;

// Re-export proc-macros
pub use macros::{shape, Shape};

/// Common items for building and querying shapes.
pub mod prelude {
    pub use crate::primitives::{And, BoolOp, Or, Scalar};
    pub use crate::shape::Shape;
    pub use crate::leaf::Circle;
    pub use crate::combine::{combine, complement, intersect, union};
    pub use crate::combine::{Combined, Complement, Intersection, Union};
    pub use crate::combine::ext::ShapeExt;
    #[cfg(feature = "trace")]
    pub use crate::trace::Traced;
    pub use macros::{shape, Shape};
    // Note: union!, intersect!, assert_shape! are #[macro_export] so they're at crate root
}
