//! # Query Tracing
//!
//! `Traced<S>` forwards membership queries to `S` and emits one `TRACE`
//! event per query through `tracing`. Only compiled with the `trace`
//! feature; without it there is no adapter and no logging in the crate.
//!
//! ```
//! use shape_algebra::prelude::*;
//!
//! let probe = Circle::new(1.0, 0.0, 0.0).traced("unit circle");
//! assert!(probe.contains([0.0, 1.0]));
//! ```

use crate::primitives::Scalar;
use crate::shape::Shape;

/// Shape adapter that logs every membership query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traced<S> {
    inner: S,
    label: &'static str,
}

impl<S> Traced<S> {
    /// Wrap `inner`, tagging its events with `label`.
    pub fn new(inner: S, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// Get a reference to the wrapped shape.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Label attached to every event.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Unwrap and return the wrapped shape.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, T, const N: usize> Shape<T, N> for Traced<S>
where
    S: Shape<T, N>,
    T: Scalar,
{
    fn contains(&self, point: [T; N]) -> bool {
        let inside = self.inner.contains(point);
        tracing::trace!(shape = self.label, ?point, inside, "membership query");
        inside
    }
}
