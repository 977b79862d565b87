//! # Combinators
//!
//! One generic composite, [`Combined<Op, L, R>`], holds two shapes by value
//! and folds their membership results with the operator `Op`. `union` and
//! `intersect` are `combine` with `Op = Or` and `Op = And`.
//!
//! ## Contract
//!
//! `Combined<Op, L, R>` implements `Shape<T, N>` exactly when both `L` and
//! `R` implement `Shape<T, N>`. Arity and coordinate type pass through the
//! composite unchanged, and a mismatch is a build error:
//!
//! ```compile_fail
//! use shape_algebra::{combine, Circle, Or};
//!
//! let line = |[x]: [f64; 1]| x == 0.0;
//! let _ = combine::<Or, _, 2, _, _>(Circle::new(1.0, 0.0, 0.0), line);
//! ```
//!
//! ## Ownership
//!
//! Operands are moved in. To keep using a leaf after composing it, pass a
//! copy; the composite then owns an independent copy:
//!
//! ```
//! use shape_algebra::{union, Circle, Shape};
//!
//! let mut a = Circle::new(1.0, 0.0, 0.0);
//! let b = Circle::new(1.0, 10.0, 10.0);
//! let both = union(a, b);
//!
//! a.set_radius(2.0);
//! assert!(a.contains([2.0, 0.0]));
//! assert!(!both.contains([2.0, 0.0]));
//! ```
//!
//! ## Threads
//!
//! A composite is `Send`/`Sync` exactly when both operands are. A closure
//! owning a `Cell` is not `Sync`, and neither is any composite holding it:
//!
//! ```compile_fail
//! use core::cell::Cell;
//! use shape_algebra::{union, Circle};
//!
//! fn require_sync<S: Sync>(_: &S) {}
//!
//! let hits = Cell::new(0_u32);
//! let counted = move |_: [f64; 2]| {
//!     hits.set(hits.get() + 1);
//!     true
//! };
//! let both = union(Circle::new(1.0, 0.0, 0.0), counted);
//! require_sync(&both);
//! ```

pub mod ext;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::primitives::{And, BoolOp, Or, Scalar};
use crate::shape::Shape;

// =============================================================================
// Combined
// =============================================================================

/// Composite of two shapes joined by the operator `Op`.
///
/// Exclusively owns both children. There is no mutable access to them:
/// a composite is fixed once built.
///
/// `Op` is only a marker: `Clone`, `Copy`, `Debug`, `PartialEq`, `Eq` and
/// `Hash` depend on the operands alone.
pub struct Combined<Op, L, R> {
    left: L,
    right: R,
    op: PhantomData<Op>,
}

impl<Op, L: Clone, R: Clone> Clone for Combined<Op, L, R> {
    fn clone(&self) -> Self {
        Combined { left: self.left.clone(), right: self.right.clone(), op: PhantomData }
    }
}

impl<Op, L: Copy, R: Copy> Copy for Combined<Op, L, R> {}

impl<Op: BoolOp, L: fmt::Debug, R: fmt::Debug> fmt::Debug for Combined<Op, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combined")
            .field("op", &Op::SYMBOL)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<Op, L: PartialEq, R: PartialEq> PartialEq for Combined<Op, L, R> {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right
    }
}

impl<Op, L: Eq, R: Eq> Eq for Combined<Op, L, R> {}

impl<Op, L: Hash, R: Hash> Hash for Combined<Op, L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.left.hash(state);
        self.right.hash(state);
    }
}

/// Points in either operand.
pub type Union<L, R> = Combined<Or, L, R>;

/// Points in both operands.
pub type Intersection<L, R> = Combined<And, L, R>;

impl<Op: BoolOp, L, R> Combined<Op, L, R> {
    /// Left operand.
    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Right operand.
    #[inline]
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Operator symbol (`|` or `&` for the built-in operators).
    #[inline]
    pub fn symbol(&self) -> &'static str {
        Op::SYMBOL
    }

    /// Take the composite apart, returning both operands by value.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<Op, L, R, T, const N: usize> Shape<T, N> for Combined<Op, L, R>
where
    Op: BoolOp,
    L: Shape<T, N>,
    R: Shape<T, N>,
    T: Scalar,
{
    #[inline]
    fn contains(&self, point: [T; N]) -> bool {
        // Both sides are always evaluated.
        let left = self.left.contains(point);
        let right = self.right.contains(point);
        Op::apply(left, right)
    }
}

// =============================================================================
// Complement
// =============================================================================

/// Every point not in the wrapped shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Complement<S> {
    inner: S,
}

impl<S> Complement<S> {
    /// The negated shape.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, T, const N: usize> Shape<T, N> for Complement<S>
where
    S: Shape<T, N>,
    T: Scalar,
{
    #[inline]
    fn contains(&self, point: [T; N]) -> bool {
        !self.inner.contains(point)
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Join two shapes of the same arity and coordinate type with operator `Op`.
///
/// `T` and `N` are normally inferred from the operands. Name them when an
/// operand implements `Shape` for more than one arity or coordinate type.
///
/// ```
/// use shape_algebra::{combine, And, Shape};
///
/// let above = |[_x, y]: [i32; 2]| y > 0;
/// let right = |[x, _y]: [i32; 2]| x > 0;
/// let quadrant = combine::<And, _, 2, _, _>(above, right);
/// assert!(quadrant.contains([1, 1]));
/// assert!(!quadrant.contains([-1, 1]));
/// ```
#[inline]
pub fn combine<Op, T, const N: usize, L, R>(left: L, right: R) -> Combined<Op, L, R>
where
    Op: BoolOp,
    T: Scalar,
    L: Shape<T, N>,
    R: Shape<T, N>,
{
    Combined { left, right, op: PhantomData }
}

/// Shape containing every point in `left` or in `right`.
#[inline]
pub fn union<T, const N: usize, L, R>(left: L, right: R) -> Union<L, R>
where
    T: Scalar,
    L: Shape<T, N>,
    R: Shape<T, N>,
{
    combine::<Or, T, N, L, R>(left, right)
}

/// Shape containing every point in both `left` and `right`.
#[inline]
pub fn intersect<T, const N: usize, L, R>(left: L, right: R) -> Intersection<L, R>
where
    T: Scalar,
    L: Shape<T, N>,
    R: Shape<T, N>,
{
    combine::<And, T, N, L, R>(left, right)
}

/// Shape containing every point not in `shape`.
#[inline]
pub fn complement<T, const N: usize, S>(shape: S) -> Complement<S>
where
    T: Scalar,
    S: Shape<T, N>,
{
    Complement { inner: shape }
}
