//! Epsilon-relative float comparisons
//!
//! Tolerances scale with the operands' magnitude times the machine epsilon of
//! the type:
//! - `same(a, b)`: `|a - b| <= min(|a|, |b|) * EPSILON`
//! - `greater_than(a, b)`: `a - b > max(|a|, |b|) * EPSILON`
//! - `less_than(a, b)`: `b - a > max(|a|, |b|) * EPSILON`
//!
//! `same` uses the smaller magnitude, so it is strict near zero: `same(0, x)`
//! holds only for `x == 0`. A value is always `same` as itself, which keeps
//! segment endpoints on their own segment.

/// Tolerant ordering predicates
pub trait TolerantFloat: Copy {
    /// Approximately equal
    fn same(self, other: Self) -> bool;

    /// Strictly greater by more than the tolerance
    fn greater_than(self, other: Self) -> bool;

    /// Strictly less by more than the tolerance
    fn less_than(self, other: Self) -> bool;

    /// `self <= other` within tolerance
    #[inline]
    fn at_most(self, other: Self) -> bool {
        self.less_than(other) || self.same(other)
    }

    /// `self >= other` within tolerance
    #[inline]
    fn at_least(self, other: Self) -> bool {
        self.greater_than(other) || self.same(other)
    }
}

macro_rules! impl_tolerant_float {
    ($t:ty) => {
        impl TolerantFloat for $t {
            #[inline]
            fn same(self, other: Self) -> bool {
                (self - other).abs() <= self.abs().min(other.abs()) * <$t>::EPSILON
            }

            #[inline]
            fn greater_than(self, other: Self) -> bool {
                (self - other) > self.abs().max(other.abs()) * <$t>::EPSILON
            }

            #[inline]
            fn less_than(self, other: Self) -> bool {
                (other - self) > self.abs().max(other.abs()) * <$t>::EPSILON
            }
        }
    };
}

impl_tolerant_float!(f32);
impl_tolerant_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_is_reflexive() {
        for v in [0.0f32, 1.0, -3.5, 1e-30, 1e30, f32::MAX] {
            assert!(v.same(v));
            assert!(v.at_most(v));
            assert!(v.at_least(v));
        }
    }

    #[test]
    fn test_same_absorbs_rounding() {
        let a = 0.1f32 + 0.2;
        let b = 0.3f32;
        assert!(a.same(b));
        assert!(!a.less_than(b));
        assert!(!a.greater_than(b));

        let a = 0.1f64 + 0.2;
        assert!(a.same(0.3));
    }

    #[test]
    fn test_same_is_strict_at_zero() {
        assert!(0.0f32.same(0.0));
        assert!(!0.0f32.same(1e-30));
        // Not `same`, but still ordered by less_than
        assert!(0.0f32.less_than(1e-30));
        assert!(0.0f32.at_most(1e-30));
    }

    #[test]
    fn test_ordering() {
        assert!(1.0f32.less_than(2.0));
        assert!(2.0f32.greater_than(1.0));
        assert!(!2.0f32.less_than(1.0));
        assert!(!1.0f32.greater_than(2.0));
        assert!(!1.0f32.same(2.0));

        assert!((-5.0f64).less_than(-4.0));
        assert!((-4.0f64).greater_than(-5.0));
    }

    #[test]
    fn test_one_ulp_apart_is_not_strictly_ordered() {
        let a = 1000.0f32;
        let b = f32::from_bits(a.to_bits() + 1);
        assert!(!a.less_than(b));
        assert!(!b.greater_than(a));
        assert!(a.at_most(b));
    }
}
