/// Numeric element that can be folded by [`sum`].
///
/// Integers accumulate with wrapping arithmetic, so an overflowing total wraps
/// around the same way in debug and release builds. Floats follow IEEE-754:
/// rounding error accumulates left to right and `inf`/`NaN` propagate.
pub trait Summable: Copy {
    const ZERO: Self;

    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! impl_summable_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summable for $t {
                const ZERO: Self = 0;

                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_summable_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summable for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_summable_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_summable_float!(f32, f64);

/// Left fold of `data` starting from [`Summable::ZERO`].
#[inline]
pub fn sum<T: Summable>(data: &[T]) -> T {
    let mut total = T::ZERO;
    for &x in data {
        total = total.accumulate(x);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(sum::<i32>(&[]), 0);
        assert_eq!(sum::<u64>(&[]), 0);
        assert_eq!(sum::<f64>(&[]), 0.0);
    }

    #[test]
    fn known_totals() {
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(sum(&[-5_i64, 5, -7]), -7);
        assert_eq!(sum(&[0.5_f32, 0.25, 0.25]), 1.0);
        assert_eq!(sum(&[1.5_f64, 2.5]), 4.0);
    }

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(sum(&[u8::MAX, 2]), 1);
        assert_eq!(sum(&[i32::MAX, 1]), i32::MIN);
        assert_eq!(sum(&[u64::MAX, u64::MAX]), u64::MAX - 1);
    }

    #[test]
    fn float_specials_propagate() {
        assert!(sum(&[1.0_f64, f64::NAN]).is_nan());
        assert_eq!(sum(&[f64::MAX, f64::MAX]), f64::INFINITY);
        assert_eq!(sum(&[0.1_f64, 0.2]), 0.1 + 0.2);
    }
}
