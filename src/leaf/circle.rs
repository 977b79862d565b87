//! Circle: the example leaf shape.

use crate::primitives::Scalar;
use crate::shape::Shape;

/// Circle in the plane, given by radius and centre.
///
/// Membership is **boundary** membership: a point is contained iff its
/// squared distance from the centre equals the squared radius exactly. The
/// interior of the disc is not contained. Combine with a closure for disc
/// semantics if needed.
///
/// ```
/// use shape_algebra::{Circle, Shape};
///
/// let c = Circle::new(5.0, 0.0, 0.0);
/// assert!(c.contains([3.0, 4.0]));
/// assert!(!c.contains([0.0, 0.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T = f64> {
    radius: T,
    centre_x: T,
    centre_y: T,
}

// Getter, mutable accessor and setter per field, all reading the field they name.
macro_rules! accessors {
    ($($field:ident => $what:literal),* $(,)?) => {
        $(
            #[doc = concat!("Returns the ", $what, ".")]
            #[inline]
            pub fn $field(&self) -> T {
                self.$field
            }

            ::paste::paste! {
                #[doc = concat!("Mutable access to the ", $what, ".")]
                #[inline]
                pub fn [<$field _mut>](&mut self) -> &mut T {
                    &mut self.$field
                }

                #[doc = concat!("Replaces the ", $what, ".")]
                #[inline]
                pub fn [<set_ $field>](&mut self, value: T) {
                    self.$field = value;
                }
            }
        )*
    };
}

impl<T: Scalar> Circle<T> {
    /// Create a circle. Every parameter is required; there is no default circle.
    pub fn new(radius: T, centre_x: T, centre_y: T) -> Self {
        Self { radius, centre_x, centre_y }
    }

    accessors! {
        radius => "radius",
        centre_x => "x coordinate of the centre",
        centre_y => "y coordinate of the centre",
    }
}

// =============================================================================
// Boundary Test
// =============================================================================

/// Coordinate types a [`Circle`] can be queried with.
///
/// Floats use IEEE arithmetic. Integers compare exact squared distances in
/// `u128`, so no query overflows; a point whose squared distance exceeds
/// `u128::MAX` is never on the circle.
#[diagnostic::on_unimplemented(
    message = "`Circle<{Self}>` cannot answer membership queries",
    note = "circles support `f32`, `f64` and integers up to 64 bits"
)]
pub trait Radial: Scalar {
    /// Whether `point` lies exactly `radius` away from `centre`.
    fn on_circle(point: [Self; 2], centre: [Self; 2], radius: Self) -> bool;
}

macro_rules! impl_radial_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Radial for $t {
                #[inline]
                fn on_circle([x, y]: [$t; 2], [cx, cy]: [$t; 2], radius: $t) -> bool {
                    let dx = x - cx;
                    let dy = y - cy;
                    dx * dx + dy * dy == radius * radius
                }
            }
        )*
    };
}

macro_rules! impl_radial_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Radial for $t {
                #[inline]
                fn on_circle([x, y]: [$t; 2], [cx, cy]: [$t; 2], radius: $t) -> bool {
                    // Each distance fits in 64 bits, so each square fits in u128.
                    let dx = x.abs_diff(cx) as u128;
                    let dy = y.abs_diff(cy) as u128;
                    let r = radius.abs_diff(0) as u128;
                    match (dx * dx).checked_add(dy * dy) {
                        Some(distance) => distance == r * r,
                        None => false,
                    }
                }
            }
        )*
    };
}

impl_radial_float!(f32, f64);
impl_radial_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Radial> Shape<T, 2> for Circle<T> {
    #[inline]
    fn contains(&self, point: [T; 2]) -> bool {
        T::on_circle(point, [self.centre_x, self.centre_y], self.radius)
    }
}
