//! Method-call construction of composites.

use crate::primitives::{BoolOp, Scalar};
use crate::shape::Shape;

use super::{Combined, Complement, Intersection, Union};

/// Fluent combinators, available on every shape.
///
/// ```
/// use shape_algebra::prelude::*;
///
/// let lens = Circle::new(5.0, 0.0, 0.0).intersect(|[x, _y]: [f64; 2]| x > 0.0);
/// assert!(lens.contains([3.0, 4.0]));
/// assert!(!lens.contains([-3.0, 4.0]));
/// ```
pub trait ShapeExt<T: Scalar, const N: usize>: Shape<T, N> + Sized {
    /// See [`combine`](super::combine).
    #[inline]
    fn combine<Op: BoolOp, S: Shape<T, N>>(self, other: S) -> Combined<Op, Self, S> {
        super::combine::<Op, T, N, Self, S>(self, other)
    }

    /// See [`union`](super::union).
    #[inline]
    fn union<S: Shape<T, N>>(self, other: S) -> Union<Self, S> {
        super::union::<T, N, Self, S>(self, other)
    }

    /// See [`intersect`](super::intersect).
    #[inline]
    fn intersect<S: Shape<T, N>>(self, other: S) -> Intersection<Self, S> {
        super::intersect::<T, N, Self, S>(self, other)
    }

    /// See [`complement`](super::complement).
    #[inline]
    fn complement(self) -> Complement<Self> {
        super::complement::<T, N, Self>(self)
    }

    /// Wrap in a [`Traced`](crate::Traced) adapter that logs every query.
    #[cfg(feature = "trace")]
    #[inline]
    fn traced(self, label: &'static str) -> crate::Traced<Self> {
        crate::Traced::new(self, label)
    }
}

impl<T: Scalar, const N: usize, S: Shape<T, N>> ShapeExt<T, N> for S {}
