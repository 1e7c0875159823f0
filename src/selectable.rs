/// A value a selector may produce.
///
/// Values are compared with `>`. Types that are not totally ordered report
/// values that compare unequal to everything (including themselves) through
/// [`Selectable::is_unorderable`]; such a value poisons the reduction.
///
/// Implemented for all primitive integers, `f32`, `f64`, and (with the
/// `bigint` feature) for `num_bigint::BigInt` and `num_bigint::BigUint`.
pub trait Selectable: PartialOrd {
    /// Returns `true` if this value cannot be ordered against any other value.
    ///
    /// Totally ordered types never are.
    fn is_unorderable(&self) -> bool {
        false
    }
}

macro_rules! impl_selectable {
    ($($t:ty),*) => {
        $(
            impl Selectable for $t {}
        )*
    };
    (float $($t:ty),*) => {
        $(
            impl Selectable for $t {
                fn is_unorderable(&self) -> bool {
                    self.is_nan()
                }
            }
        )*
    };
}

impl_selectable!(usize, u8, u16, u32, u64, u128, isize, i8, i16, i32, i64, i128);
impl_selectable!(float f32, f64);

#[cfg(feature = "bigint")]
impl_selectable!(num_bigint::BigInt, num_bigint::BigUint);

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn nan_is_unorderable() {
        assert!(f64::NAN.is_unorderable());
        assert!(f32::NAN.is_unorderable());
        assert!((-f64::NAN).is_unorderable());
    }

    #[test_log::test]
    fn floats_are_orderable() {
        assert!(!0.0_f64.is_unorderable());
        assert!(!f64::INFINITY.is_unorderable());
        assert!(!f32::NEG_INFINITY.is_unorderable());
    }

    #[test_log::test]
    fn integers_are_orderable() {
        assert!(!i32::MIN.is_unorderable());
        assert!(!u128::MAX.is_unorderable());
        assert!(!0_usize.is_unorderable());
    }

    #[cfg(feature = "bigint")]
    #[test_log::test]
    fn bigints_are_orderable() {
        use num_bigint::{BigInt, BigUint};

        assert!(!BigInt::from(-7).is_unorderable());
        assert!(!BigUint::from(7_u32).is_unorderable());
    }
}
