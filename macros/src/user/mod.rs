//! User-facing macro implementations
//!
//! # Unified Macro Names
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `shape!` | function macro | Compose shapes with `\|`, `&`, `!` |
//! | `#[derive(Shape)]` | on struct | Forward the shape contract to the wrapped field |

mod derive_shape;

pub use derive_shape::expand_derive_shape;
