use crate::error::{Error, Result};

/// Accepts a name and does nothing with it.
pub fn greet(name: &str) {
    log::trace!("greet({name:?})");
}

/// Number of bytes in `s` before the first `0`.
///
/// At most `max_len` bytes (and never more than `s.len()`) are scanned; a
/// string with no terminator inside that window is rejected with
/// [`Error::InvalidInput`].
pub fn string_length(s: &[u8], max_len: usize) -> Result<usize> {
    let bound = max_len.min(s.len());
    let mut len = 0;
    while len < bound {
        if s[len] == b'\0' {
            return Ok(len);
        }
        len += 1;
    }
    log::debug!("string_length: no terminator within {bound} bytes");
    Err(Error::InvalidInput { scanned: bound })
}

/// Copies the first `n` bytes of `src` into `dest`, lowest index first, and
/// returns `dest`.
///
/// Nothing is written when `n` exceeds either buffer.
pub fn copy_bytes<'a>(dest: &'a mut [u8], src: &[u8], n: usize) -> Result<&'a mut [u8]> {
    Error::ensure_in_bounds(n, src.len())?;
    Error::ensure_in_bounds(n, dest.len())?;

    let mut i = 0;
    while i < n {
        dest[i] = src[i];
        i += 1;
    }
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        greet("");
        greet("world");
    }

    #[test]
    fn test_string_length() {
        assert_eq!(string_length(b"\0", 16), Ok(0));
        assert_eq!(string_length(b"abc\0", 16), Ok(3));
        assert_eq!(string_length(b"abc\0def\0", 16), Ok(3));
        assert_eq!(string_length(c"hello".to_bytes_with_nul(), 64), Ok(5));
    }

    #[test]
    fn test_string_length_without_terminator() {
        assert_eq!(
            string_length(b"abc", 16),
            Err(Error::InvalidInput { scanned: 3 })
        );
        assert_eq!(string_length(b"", 16), Err(Error::InvalidInput { scanned: 0 }));
    }

    #[test]
    fn test_string_length_scan_bound() {
        assert_eq!(
            string_length(b"abcdef\0", 4),
            Err(Error::InvalidInput { scanned: 4 })
        );
        // the terminator sits at index 3, inside a window of 4
        assert_eq!(string_length(b"abc\0", 4), Ok(3));
        assert_eq!(
            string_length(b"abc\0", 3),
            Err(Error::InvalidInput { scanned: 3 })
        );
    }

    #[test]
    fn test_copy_bytes() {
        let src = [1u8, 2, 3];
        let mut dest = [0u8; 3];
        let dest_ptr = dest.as_ptr();

        let out = copy_bytes(&mut dest, &src, 3).unwrap();
        assert_eq!(out.as_ptr(), dest_ptr);
        assert_eq!(out, &[1, 2, 3]);
        assert_eq!(dest, [1, 2, 3]);
    }

    #[test]
    fn test_copy_bytes_partial() {
        let src = [9u8, 8, 7, 6];
        let mut dest = [0u8; 5];
        copy_bytes(&mut dest, &src, 2).unwrap();
        assert_eq!(dest, [9, 8, 0, 0, 0]);

        copy_bytes(&mut dest, &src, 0).unwrap();
        assert_eq!(dest, [9, 8, 0, 0, 0]);
    }

    #[test]
    fn test_copy_bytes_out_of_bounds() {
        let mut dest = [0u8; 2];
        assert_eq!(
            copy_bytes(&mut dest, &[1, 2, 3], 3),
            Err(Error::OutOfBounds {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(dest, [0, 0]);

        let mut dest = [0u8; 8];
        assert_eq!(
            copy_bytes(&mut dest, &[1, 2], 3),
            Err(Error::OutOfBounds {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(dest, [0; 8]);
    }
}
