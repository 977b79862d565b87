//! Variadic Composition Macros
//!
//! `union!` and `intersect!` fold any number of operands into nested
//! composites, left to right. For mixed operators use `shape!`.

// =============================================================================
// union! - OR together any number of shapes
// =============================================================================

/// Union of one or more shapes.
///
/// `union!(a, b, c)` is `union(union(a, b), c)`. A single operand is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use shape_algebra::{union, Circle, Shape};
///
/// let beads = union!(
///     Circle::new(1.0, 0.0, 0.0),
///     Circle::new(1.0, 3.0, 0.0),
///     Circle::new(1.0, 6.0, 0.0),
/// );
/// assert!(beads.contains([7.0, 0.0]));
/// assert!(!beads.contains([4.5, 0.0]));
/// ```
#[macro_export]
macro_rules! union {
    ($shape:expr $(,)?) => {
        $shape
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::union!($crate::union($first, $second) $(, $rest)*)
    };
}

// =============================================================================
// intersect! - AND together any number of shapes
// =============================================================================

/// Intersection of one or more shapes.
///
/// `intersect!(a, b, c)` is `intersect(intersect(a, b), c)`.
///
/// # Example
///
/// ```
/// use shape_algebra::{intersect, Shape};
///
/// let band = intersect!(
///     |[x]: [i32; 1]| x >= 0,
///     |[x]: [i32; 1]| x < 10,
///     |[x]: [i32; 1]| x % 2 == 0,
/// );
/// assert!(band.contains([4]));
/// assert!(!band.contains([5]));
/// assert!(!band.contains([12]));
/// ```
#[macro_export]
macro_rules! intersect {
    ($shape:expr $(,)?) => {
        $shape
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::intersect!($crate::intersect($first, $second) $(, $rest)*)
    };
}
