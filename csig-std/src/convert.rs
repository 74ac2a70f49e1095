/// Truncates toward zero. Out-of-range values saturate, NaN becomes 0.
#[cfg_attr(not(test), allow(dead_code))]
fn internal_helper(x: f64) -> i32 {
    x as i32
}
