// crates/shared-kernel/tests/vector_conversions.rs
use rangekit_shared_kernel::{FloatRange, Vector2, Vector2Int};

#[test]
fn int_vector_widens_to_float_vector() {
    let v = Vector2::from(Vector2Int::new(-3, 7));
    assert_eq!(v, Vector2::new(-3.0, 7.0));
}

#[test]
fn float_range_round_trips_through_vector() {
    let range = FloatRange::new(0.25, -0.5);
    let v = Vector2::from(range);
    assert_eq!(v, Vector2::new(-0.5, 0.25));
    assert_eq!(FloatRange::from(v), range);
}

#[test]
fn display_forms() {
    assert_eq!(Vector2Int::new(1, 2).to_string(), "(1, 2)");
    assert_eq!(Vector2::new(1.5, 2.0).to_string(), "(1.5, 2)");
    assert_eq!(FloatRange::new(2.0, 0.5).to_string(), "[0.5, 2]");
}
