//! Coordinate model.
//!
//! A point in N dimensions is `[T; N]`: N values of one scalar type. There is
//! no point struct; the array is the parameter list a membership query takes.

use core::fmt::Debug;

/// Numeric type usable as a single coordinate value.
///
/// Implemented for the primitive integers and floats. Fixed-point or other
/// numeric newtypes can opt in by implementing it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a coordinate type",
    label = "not a `Scalar`",
    note = "coordinates must be `Copy + PartialEq + Debug + 'static`; implement `Scalar` for custom numeric types"
)]
pub trait Scalar: Copy + PartialEq + Debug + 'static {}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $( impl Scalar for $ty {} )*
    };
}

impl_scalar!(
    f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

/// A point of arity `N` over coordinate type `T`: the argument of
/// [`Shape::contains`](crate::Shape::contains).
pub type Coord<T, const N: usize> = [T; N];
