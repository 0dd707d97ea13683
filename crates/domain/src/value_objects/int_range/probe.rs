// crates/domain/src/value_objects/int_range/probe.rs

/// Numeric value that can be tested against integer bounds without lossy casts.
///
/// Integers compare exactly; floats compare in `f64`, which represents every
/// `i32` exactly. NaN satisfies no bound.
pub trait RangeProbe: Copy {
    fn is_at_least(self, bound: i32) -> bool;
    fn is_at_most(self, bound: i32) -> bool;
    fn is_below(self, bound: i32) -> bool;
}

macro_rules! impl_integer_probe {
    ($($ty:ty),*) => {$(
        impl RangeProbe for $ty {
            #[inline]
            fn is_at_least(self, bound: i32) -> bool {
                i64::from(self) >= i64::from(bound)
            }

            #[inline]
            fn is_at_most(self, bound: i32) -> bool {
                i64::from(self) <= i64::from(bound)
            }

            #[inline]
            fn is_below(self, bound: i32) -> bool {
                i64::from(self) < i64::from(bound)
            }
        }
    )*};
}

macro_rules! impl_float_probe {
    ($($ty:ty),*) => {$(
        impl RangeProbe for $ty {
            #[inline]
            fn is_at_least(self, bound: i32) -> bool {
                f64::from(self) >= f64::from(bound)
            }

            #[inline]
            fn is_at_most(self, bound: i32) -> bool {
                f64::from(self) <= f64::from(bound)
            }

            #[inline]
            fn is_below(self, bound: i32) -> bool {
                f64::from(self) < f64::from(bound)
            }
        }
    )*};
}

impl_integer_probe!(i8, i16, i32, i64, u8, u16, u32);
impl_float_probe!(f32, f64);
