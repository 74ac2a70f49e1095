//! Small standalone helpers: integer and float arithmetic, bounded string
//! and byte-buffer routines, array sums and callable dispatch.
//!
//! Every function is pure and keeps no state between calls. The `ffi` module
//! exports the same surface as C symbols, declared in `include/csig_std.h`.

pub mod array;
pub mod convert;
pub mod error;
pub mod ffi;
pub mod math;
pub mod string;

pub use array::{sum_array, sum_variadic};
pub use error::{Error, Result};
pub use math::{Point, add, apply, distance_squared, square_unsigned_long};
pub use string::{copy_bytes, greet, string_length};

/// Header describing the C symbols exported by [`ffi`].
pub const C_HEADER: &str = include_str!("../include/csig_std.h");

/// File name the header is published under.
pub const C_HEADER_NAME: &str = "csig_std.h";
