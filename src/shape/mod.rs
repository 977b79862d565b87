//! # Shape Contract
//!
//! A shape is anything that answers "is this point inside?" for points of a
//! fixed arity `N` over a fixed coordinate type `T`. There is no base type and
//! no runtime tag: conformance is the trait bound `Shape<T, N>`, checked when
//! a generic is instantiated.
//!
//! ## Conforming Values
//!
//! - Leaf types implementing `Shape<T, N>` directly (e.g. [`Circle`](crate::Circle)).
//! - Composites built by the combinators ([`Combined`](crate::Combined),
//!   [`Complement`](crate::Complement)).
//! - Any closure or function `Fn([T; N]) -> R` where `R: Into<bool>`.
//!
//! ```
//! use shape_algebra::{Circle, Shape, union};
//!
//! let ring = Circle::new(5.0, 0.0, 0.0);
//! let right_half = |[x, _y]: [f64; 2]| x >= 0.0;
//!
//! let shape = union(ring, right_half);
//! assert!(shape.contains([-3.0, 4.0])); // on the ring
//! assert!(shape.contains([1.0, 1.0]));  // right half-plane
//! assert!(!shape.contains([-1.0, 1.0]));
//! ```
//!
//! ## Build-time Rejection
//!
//! Combining shapes that disagree on arity fails to compile:
//!
//! ```compile_fail
//! use shape_algebra::{Circle, union};
//!
//! let flat = Circle::new(1.0, 0.0, 0.0);
//! let solid = |[x, y, z]: [f64; 3]| x * x + y * y + z * z <= 1.0;
//! let _ = union(flat, solid);
//! ```
//!
//! So does combining shapes over different coordinate types:
//!
//! ```compile_fail
//! use shape_algebra::{Circle, intersect};
//!
//! let a: Circle<f64> = Circle::new(1.0, 0.0, 0.0);
//! let b: Circle<f32> = Circle::new(1.0, 0.0, 0.0);
//! let _ = intersect(a, b);
//! ```
//!
//! And passing something that is not a shape at all:
//!
//! ```compile_fail
//! use shape_algebra::{Circle, union};
//!
//! let _ = union(Circle::new(1.0, 0.0, 0.0), 42_u8);
//! ```

use crate::primitives::{Coord, Scalar};

/// Membership predicate of arity `N` over coordinate type `T`.
///
/// Evaluation takes `&self`: querying a shape never mutates it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a shape over {N} coordinate(s) of type `{T}`",
    label = "does not accept `[{T}; {N}]` as a membership query",
    note = "implement `Shape<{T}, {N}>`, or pass a closure `Fn([{T}; {N}]) -> impl Into<bool>`",
    note = "all operands of one composition must agree on both arity and coordinate type"
)]
pub trait Shape<T: Scalar, const N: usize> {
    /// Returns `true` iff `point` is a member of this shape.
    ///
    /// [`Coord<T, N>`](Coord) is `[T; N]`; implementations may spell the
    /// parameter either way.
    fn contains(&self, point: Coord<T, N>) -> bool;
}

// Callables are shapes: invoked with N coordinates, any boolean-like result.
impl<T, const N: usize, F, R> Shape<T, N> for F
where
    T: Scalar,
    F: Fn([T; N]) -> R,
    R: Into<bool>,
{
    #[inline]
    fn contains(&self, point: Coord<T, N>) -> bool {
        self(point).into()
    }
}

/// Assert at compile time that types conform to the shape contract.
///
/// Expands to a `const` item with no runtime code; a non-conforming type
/// fails the build at the assertion.
///
/// ```
/// use shape_algebra::{assert_shape, Circle, Union};
///
/// assert_shape!(Circle: [f64; 2], Union<Circle<i32>, Circle<i32>>: [i32; 2]);
/// ```
///
/// ```compile_fail
/// use shape_algebra::{assert_shape, Circle};
///
/// assert_shape!(Circle: [f64; 3]);
/// ```
#[macro_export]
macro_rules! assert_shape {
    ($($ty:ty : [$t:ty; $n:expr]),+ $(,)?) => {
        const _: () = {
            const fn __assert_shape<S, T, const N: usize>()
            where
                S: $crate::Shape<T, N>,
                T: $crate::Scalar,
            {
            }
            $( __assert_shape::<$ty, $t, { $n }>(); )+
        };
    };
}
