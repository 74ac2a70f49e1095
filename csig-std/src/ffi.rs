//! C symbols for the helpers, declared in `include/csig_std.h`.
//!
//! Every pointer is checked for null and turned into a bounded slice before
//! the safe routine runs. Failures are reported through sentinel values
//! (`-1`, `NULL`, NaN) since C callers have no `Result`.

use core::ffi::{c_char, c_int, c_void};
use core::slice;

use crate::{array, math, string};

pub type BinaryFn = extern "C" fn(c_int, c_int) -> c_int;

#[unsafe(no_mangle)]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    math::add(a, b)
}

/// # Safety
///
/// `name` is null or points at a readable, nul-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn greet(name: *const c_char) {
    if name.is_null() {
        return;
    }
    let name = unsafe { core::ffi::CStr::from_ptr(name) };
    string::greet(&name.to_string_lossy());
}

/// Returns `-1` when `s` is null or has no terminator in its first
/// `max_len` bytes.
///
/// Bytes are read one at a time and never past the terminator, so
/// `max_len` may exceed the buffer (`SIZE_MAX` behaves like `strlen`).
///
/// # Safety
///
/// `s` is null, or readable up to its terminator or `max_len` bytes,
/// whichever comes first.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn string_length(s: *const c_char, max_len: usize) -> isize {
    if s.is_null() {
        log::warn!("string_length: null string");
        return -1;
    }
    let mut readable = 0;
    while readable < max_len {
        let byte = unsafe { *s.add(readable) };
        readable += 1;
        if byte == 0 {
            break;
        }
    }
    let bytes = unsafe { slice::from_raw_parts(s as *const u8, readable) };
    match string::string_length(bytes, max_len) {
        Ok(len) => len as isize,
        Err(_) => -1,
    }
}

/// Returns `dest`, or null when a pointer is null or `n` exceeds a length.
///
/// # Safety
///
/// `dest` is valid for writes of `dest_len` bytes, `src` for reads of
/// `src_len` bytes, and the two regions do not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn copy_bytes(
    dest: *mut c_void,
    dest_len: usize,
    src: *const c_void,
    src_len: usize,
    n: usize,
) -> *mut c_void {
    if dest.is_null() || src.is_null() {
        log::warn!("copy_bytes: null buffer");
        return core::ptr::null_mut();
    }
    let d = unsafe { slice::from_raw_parts_mut(dest as *mut u8, dest_len) };
    let s = unsafe { slice::from_raw_parts(src as *const u8, src_len) };
    match string::copy_bytes(d, s, n) {
        Ok(_) => dest,
        Err(_) => core::ptr::null_mut(),
    }
}

/// Writes the sum of `arr[0..n]` to `out` and returns `0`, or returns `-1`.
///
/// # Safety
///
/// `arr` is valid for reads of `len` ints and `out` for one write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sum_array(
    arr: *const c_int,
    len: usize,
    n: usize,
    out: *mut c_int,
) -> c_int {
    if arr.is_null() || out.is_null() {
        log::warn!("sum_array: null pointer");
        return -1;
    }
    let values = unsafe { slice::from_raw_parts(arr, len) };
    match array::sum_array(values, n) {
        Ok(sum) => {
            unsafe { *out = sum };
            0
        }
        Err(_) => -1,
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn square_unsigned_long(x: u64) -> u64 {
    math::square_unsigned_long(x)
}

/// NaN for a null point.
///
/// # Safety
///
/// `point` is null or points at a readable `Point`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn distance_squared(point: *const math::Point) -> f64 {
    match unsafe { point.as_ref() } {
        Some(p) => math::distance_squared(p),
        None => {
            log::warn!("distance_squared: null point");
            f64::NAN
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn apply(func: Option<BinaryFn>, a: c_int, b: c_int) -> c_int {
    match func {
        Some(f) => math::apply(|x, y| f(x, y), a, b),
        None => {
            log::warn!("apply: null function");
            0
        }
    }
}

/// Counted-array stand-in for `sum_variadic(int count, ...)`.
///
/// # Safety
///
/// `values` is null or valid for reads of `count` ints.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sum_variadic(count: usize, values: *const c_int) -> c_int {
    if values.is_null() {
        return 0;
    }
    array::sum_variadic(unsafe { slice::from_raw_parts(values, count) })
}
