use crate::error::{Error, Result};

/// Sums `arr[0..n]` in index order. Overflow wraps.
pub fn sum_array(arr: &[i32], n: usize) -> Result<i32> {
    Error::ensure_in_bounds(n, arr.len())?;

    let mut sum: i32 = 0;
    for i in 0..n {
        sum = sum.wrapping_add(arr[i]);
    }
    Ok(sum)
}

/// Sums every value in `values`, first to last. Overflow wraps.
pub fn sum_variadic(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |total, v| total.wrapping_add(*v))
}

/// Positional form of [`sum_variadic`].
///
/// ```rust
/// use csig_std::sum_variadic;
/// assert_eq!(sum_variadic!(1, 2, 3), 6);
/// assert_eq!(sum_variadic!(), 0);
/// ```
#[macro_export]
macro_rules! sum_variadic {
    ($($value:expr),* $(,)?) => {
        $crate::array::sum_variadic(&[$($value),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_array() {
        assert_eq!(sum_array(&[], 0), Ok(0));
        assert_eq!(sum_array(&[1, 2, 3], 3), Ok(6));
        assert_eq!(sum_array(&[1, 2, 3], 2), Ok(3));
        assert_eq!(sum_array(&[5, -5, 7], 0), Ok(0));
    }

    #[test]
    fn test_sum_array_wraps() {
        assert_eq!(sum_array(&[i32::MAX, 1], 2), Ok(i32::MIN));
        assert_eq!(sum_array(&[i32::MIN, -1, 1], 3), Ok(i32::MIN));
    }

    #[test]
    fn test_sum_array_out_of_bounds() {
        assert_eq!(
            sum_array(&[1, 2], 3),
            Err(Error::OutOfBounds {
                requested: 3,
                available: 2
            })
        );
        assert!(sum_array(&[], 1).is_err());
    }

    #[test]
    fn test_sum_variadic() {
        assert_eq!(sum_variadic(&[1, 2, 3]), 6);
        assert_eq!(sum_variadic(&[]), 0);
        assert_eq!(sum_variadic(&[i32::MAX, 1]), i32::MIN);
    }

    #[test]
    fn test_sum_variadic_macro() {
        assert_eq!(sum_variadic!(1, 2, 3), 6);
        assert_eq!(sum_variadic!(), 0);
        assert_eq!(sum_variadic!(-4, 4,), 0);
    }
}
