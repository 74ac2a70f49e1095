/// A 2D coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer sum. Overflow wraps.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `x * x` modulo 2^64.
pub fn square_unsigned_long(x: u64) -> u64 {
    x.wrapping_mul(x)
}

/// Squared distance of `point` from the origin.
pub fn distance_squared(point: &Point) -> f64 {
    point.x * point.x + point.y * point.y
}

/// Calls `func(a, b)` and hands back whatever it returns.
pub fn apply<F>(func: F, a: i32, b: i32) -> i32
where
    F: Fn(i32, i32) -> i32,
{
    func(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-1, 1), 0);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_square_unsigned_long() {
        assert_eq!(square_unsigned_long(3), 9);
        assert_eq!(square_unsigned_long(0), 0);
        assert_eq!(square_unsigned_long(1 << 32), 0);
        assert_eq!(square_unsigned_long(u64::MAX), 1);
    }

    #[test]
    fn test_distance_squared() {
        assert_eq!(distance_squared(&Point::new(3.0, 4.0)), 25.0);
        assert_eq!(distance_squared(&Point::default()), 0.0);
        assert!(distance_squared(&Point::new(f64::NAN, 1.0)).is_nan());
        assert_eq!(
            distance_squared(&Point::new(f64::INFINITY, 0.0)),
            f64::INFINITY
        );
    }

    #[test]
    fn test_apply() {
        assert_eq!(apply(add, 2, 3), 5);
        assert_eq!(apply(|a, b| a * b, 4, 5), 20);

        let offset = 10;
        assert_eq!(apply(|a, b| a - b + offset, 1, 2), 9);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_apply_propagates_panic() {
        apply(|_, _| panic!("boom"), 0, 0);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let p = Point::new(1.5, -2.5);
        assert_eq!(distance_squared(&p), distance_squared(&p));
        assert_eq!(add(7, 8), add(7, 8));
        assert_eq!(square_unsigned_long(12), square_unsigned_long(12));
    }
}
