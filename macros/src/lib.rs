//! Procedural macros for the shape-algebra combinators
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `shape!` | - | Build a composite from a boolean expression |
//! | `#[derive(Shape)]` | struct | Newtype wrapper forwarding `Shape` |
//!
//! ## Example
//!
//! ```ignore
//! use shape_algebra::prelude::*;
//!
//! let a = Circle::new(1.0, 0.0, 0.0);
//! let b = Circle::new(1.0, 1.0, 0.0);
//! let c = Circle::new(1.0, 2.0, 0.0);
//!
//! // union(a, intersect(b, complement(c)))
//! let s = shape!(a | b & !c);
//!
//! #[derive(Shape)]
//! struct Pair(Union<Circle, Circle>);
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Compose shapes with a boolean expression.
///
/// | Syntax | Meaning |
/// |--------|---------|
/// | `a \| b` or `a \|\| b` | `union(a, b)` |
/// | `a & b` or `a && b` | `intersect(a, b)` |
/// | `!a` | `complement(a)` |
/// | `( ... )` | grouping |
///
/// Precedence is `!` > `&` > `|`; binary operators associate to the left.
/// Operands are arbitrary expressions without a top-level `|` or `&`.
/// Wrap closures (and reference expressions) in braces.
///
/// # Usage
/// ```ignore
/// let lens = shape!(left & right);
/// let ring_or_half = shape!(ring | { |[x, _y]: [f64; 2]| x > 0.0 });
/// let outside = shape!(!(a | b));
/// ```
#[proc_macro]
pub fn shape(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as common::ShapeExpr);
    common::shape_expr_to_tokens(&expr).into()
}

/// Derive `Shape` for a struct with exactly one field.
///
/// The struct implements `Shape<T, N>` for every `(T, N)` its field does,
/// forwarding membership queries to the field.
///
/// # Usage
/// ```ignore
/// #[derive(Shape)]
/// struct Annulus(Intersection<Disc, Complement<Disc>>);
///
/// #[derive(Shape)]
/// struct Named<S> { shape: S }
/// ```
#[proc_macro_derive(Shape)]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_shape(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
