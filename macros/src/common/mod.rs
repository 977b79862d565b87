// Common utilities shared between macros
//
// This module contains:
// - shape_expr: Boolean shape expression parsing and expansion

mod shape_expr;

pub use shape_expr::*;
