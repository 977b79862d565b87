//! # Composite Tests
//!
//! Union / intersect / combine over leaves, closures and nested composites:
//! - Worked composite example
//! - Value ownership of operands
//! - Arity and coordinate type propagation
//! - Generic `combine` with a custom operator
//! - Derived traits and thread safety of composites

use shape_algebra::prelude::*;
use shape_algebra::assert_shape;

type TwoCircles = Union<Circle, Circle>;

assert_shape!(
    TwoCircles: [f64; 2],
    Intersection<TwoCircles, Complement<Circle>>: [f64; 2],
    Union<Circle<i64>, Circle<i64>>: [i64; 2],
);

fn two_circles() -> TwoCircles {
    let a = Circle::new(1.0, 0.0, 0.0);
    let b = Circle::new(1.0, 10.0, 10.0);
    union(a, b)
}

// =============================================================================
// Worked Example
// =============================================================================

#[test]
fn test_union_of_distant_circles() {
    let shape = two_circles();
    assert!(shape.contains([1.0, 0.0]));
    assert!(!shape.contains([5.0, 5.0]));
    assert!(shape.contains([10.0, 9.0]));
}

#[test]
fn test_intersection_of_distant_circles_is_empty() {
    let shape = intersect(Circle::new(1.0, 0.0, 0.0), Circle::new(1.0, 10.0, 10.0));
    for p in [[1.0, 0.0], [10.0, 9.0], [5.0, 5.0]] {
        assert!(!shape.contains(p));
    }
}

#[test]
fn test_intersection_of_crossing_circles() {
    // Radius 5 around (0, 0) and (6, 0) cross at (3, 4) and (3, -4).
    let lens = intersect(Circle::new(5.0, 0.0, 0.0), Circle::new(5.0, 6.0, 0.0));
    assert!(lens.contains([3.0, 4.0]));
    assert!(lens.contains([3.0, -4.0]));
    assert!(!lens.contains([5.0, 0.0]));
    assert!(!lens.contains([1.0, 0.0]));
}

// =============================================================================
// Ownership
// =============================================================================

#[test]
fn test_composite_owns_a_copy() {
    let mut a = Circle::new(1.0, 0.0, 0.0);
    let shape = union(a, Circle::new(1.0, 10.0, 10.0));

    a.set_radius(3.0);
    assert!(a.contains([3.0, 0.0]));
    assert!(!shape.contains([3.0, 0.0]));
    assert!(shape.contains([1.0, 0.0]));
    assert_eq!(shape.left().radius(), 1.0);
}

#[test]
fn test_rebuilt_composite_is_independent() {
    let shape = two_circles();
    let (mut left, right) = shape.into_parts();
    left.set_radius(2.0);

    let rebuilt = union(left, right);
    assert!(rebuilt.contains([2.0, 0.0]));
    assert!(!shape.contains([2.0, 0.0]));
}

#[test]
fn test_non_copy_operands_are_moved() {
    struct Threshold {
        min: Vec<i32>,
    }
    impl Shape<i32, 1> for Threshold {
        fn contains(&self, [x]: [i32; 1]) -> bool {
            self.min.iter().all(|&m| x >= m)
        }
    }

    let a = Threshold { min: vec![0, 2] };
    let b = Threshold { min: vec![5] };
    let shape = intersect(a, b);
    assert!(shape.contains([7]));
    assert!(!shape.contains([3]));
    assert_eq!(shape.left().min, vec![0, 2]);
}

// =============================================================================
// Mixed Operands and Arity
// =============================================================================

#[test]
fn test_circle_and_closure() {
    let upper = |[_x, y]: [f64; 2]| y > 0.0;
    let top_arc = intersect(Circle::new(5.0, 0.0, 0.0), upper);
    assert!(top_arc.contains([3.0, 4.0]));
    assert!(!top_arc.contains([3.0, -4.0]));
}

#[test]
fn test_three_dimensional_composition() {
    let ball = |[x, y, z]: [f64; 3]| x * x + y * y + z * z <= 1.0;
    let slab = |[_x, _y, z]: [f64; 3]| z.abs() <= 0.25;
    let puck = intersect(ball, slab);
    assert!(puck.contains([0.5, 0.5, 0.0]));
    assert!(!puck.contains([0.0, 0.0, 0.5]));
    assert!(!puck.contains([1.0, 1.0, 0.0]));
}

#[test]
fn test_one_dimensional_integers() {
    let even = |[x]: [u32; 1]| x % 2 == 0;
    let small = |[x]: [u32; 1]| x < 10;
    let shape = union(intersect(even, small), |[x]: [u32; 1]| x == 99);
    let members: Vec<u32> = (0..100).filter(|&x| shape.contains([x])).collect();
    assert_eq!(members, vec![0, 2, 4, 6, 8, 99]);
}

#[test]
fn test_deep_nesting() {
    let nested = union(
        union(Circle::new(1.0, 0.0, 0.0), Circle::new(2.0, 0.0, 0.0)),
        union(Circle::new(3.0, 0.0, 0.0), Circle::new(4.0, 0.0, 0.0)),
    );
    for r in 1..=4 {
        assert!(nested.contains([r as f64, 0.0]));
    }
    assert!(!nested.contains([5.0, 0.0]));
}

// =============================================================================
// Generic combine and ShapeExt
// =============================================================================

/// Symmetric difference: exactly one operand contains the point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Xor;

impl BoolOp for Xor {
    const SYMBOL: &'static str = "^";

    fn apply(left: bool, right: bool) -> bool {
        left ^ right
    }
}

#[test]
fn test_combine_matches_union_and_intersect() {
    let a = Circle::new(5.0, 0.0, 0.0);
    let b = Circle::new(5.0, 6.0, 0.0);
    let via_or = combine::<Or, _, 2, _, _>(a, b);
    let via_and = combine::<And, _, 2, _, _>(a, b);

    for p in [[3.0, 4.0], [0.0, 5.0], [11.0, 0.0], [0.0, 0.0]] {
        assert_eq!(via_or.contains(p), union(a, b).contains(p));
        assert_eq!(via_and.contains(p), intersect(a, b).contains(p));
    }
}

#[test]
fn test_custom_operator() {
    let a = Circle::new(5.0, 0.0, 0.0);
    let b = Circle::new(5.0, 6.0, 0.0);
    let either_not_both = combine::<Xor, _, 2, _, _>(a, b);

    assert_eq!(either_not_both.symbol(), "^");
    assert!(either_not_both.contains([0.0, 5.0]));
    assert!(either_not_both.contains([11.0, 0.0]));
    assert!(!either_not_both.contains([3.0, 4.0]));
    assert!(!either_not_both.contains([0.0, 0.0]));
}

#[test]
fn test_fluent_methods() {
    let a = Circle::new(5.0, 0.0, 0.0);
    let b = Circle::new(5.0, 6.0, 0.0);

    let fluent = a.union(b).intersect(|[_x, y]: [f64; 2]| y > 0.0);
    let explicit = intersect(union(a, b), |[_x, y]: [f64; 2]| y > 0.0);
    for p in [[3.0, 4.0], [3.0, -4.0], [0.0, 5.0], [11.0, 0.0]] {
        assert_eq!(fluent.contains(p), explicit.contains(p));
    }

    let outside = a.complement();
    assert!(outside.contains([0.0, 0.0]));
    assert!(!outside.contains([5.0, 0.0]));

    let xor = a.combine::<Xor, _>(b);
    assert!(xor.contains([0.0, 5.0]));
}

// =============================================================================
// Derived Traits and Threads
// =============================================================================

/// NAND with no derives: the composite's traits must not depend on it.
struct Nand;

impl BoolOp for Nand {
    const SYMBOL: &'static str = "nand";

    fn apply(left: bool, right: bool) -> bool {
        !(left && right)
    }
}

fn assert_send_sync<S: Send + Sync>() {}

#[test]
fn test_composites_are_send_and_sync() {
    assert_send_sync::<Union<Circle, Circle>>();
    assert_send_sync::<Intersection<Circle, Complement<Circle>>>();
    assert_send_sync::<Combined<Nand, Circle<i32>, Circle<i32>>>();
}

#[test]
fn test_composite_shared_across_threads() {
    let shape = two_circles();
    let hits = std::thread::scope(|s| {
        let near = s.spawn(|| shape.contains([1.0, 0.0]));
        let far = s.spawn(|| shape.contains([10.0, 9.0]));
        [near.join().unwrap(), far.join().unwrap()]
    });
    assert_eq!(hits, [true, true]);
}

#[test]
fn test_traits_do_not_depend_on_operator() {
    let a = Circle::new(5.0, 0.0, 0.0);
    let b = Circle::new(5.0, 6.0, 0.0);
    let not_both = combine::<Nand, _, 2, _, _>(a, b);

    let copied = not_both;
    let cloned = not_both.clone();
    assert_eq!(copied, cloned);
    assert!(!cloned.contains([3.0, 4.0]));
    assert!(copied.contains([0.0, 0.0]));
    assert_eq!(
        format!("{:?}", not_both),
        format!("Combined {{ op: \"nand\", left: {:?}, right: {:?} }}", a, b),
    );
}

#[test]
fn test_operands_decide_equality() {
    let a = Circle::new(1.0, 0.0, 0.0);
    let b = Circle::new(1.0, 10.0, 10.0);
    assert_eq!(union(a, b), two_circles());
    assert_ne!(union(b, a), two_circles());
}
