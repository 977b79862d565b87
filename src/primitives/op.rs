//! Boolean combining operators.
//!
//! Core types: `Or` (union), `And` (intersection), `BoolOp` trait.
//!
//! Operators are zero-sized markers carried as a type parameter of
//! [`Combined`](crate::Combined), so the operator of a composite is fixed
//! when the composite's type is named and costs nothing at runtime.

/// Boolean operator folding two membership results into one.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a boolean combining operator",
    label = "expected `Or`, `And`, or another `BoolOp`",
    note = "composites take their operator as a type parameter implementing `BoolOp`"
)]
pub trait BoolOp: 'static {
    /// Symbol naming the operator.
    const SYMBOL: &'static str;

    /// Combine the left and right membership results.
    fn apply(left: bool, right: bool) -> bool;
}

/// Logical OR: the point is in at least one operand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Or;

/// Logical AND: the point is in both operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct And;

impl BoolOp for Or {
    const SYMBOL: &'static str = "|";

    #[inline(always)]
    fn apply(left: bool, right: bool) -> bool {
        left | right
    }
}

impl BoolOp for And {
    const SYMBOL: &'static str = "&";

    #[inline(always)]
    fn apply(left: bool, right: bool) -> bool {
        left & right
    }
}
