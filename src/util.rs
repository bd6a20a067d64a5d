//! Utility functions.

use std::ffi;

/// Cast a NUL terminated byte slice into a C string.
///
/// Returns `None` if the final byte is not the only NUL byte.
pub fn cstr<T>(bytes: &T) -> Option<&ffi::CStr>
    where T: AsRef<[u8]> + ?Sized
{
    ffi::CStr::from_bytes_with_nul(bytes.as_ref()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cstr_requires_a_single_trailing_nul() {
        assert_eq!(Some("tex"), cstr(b"tex\0").and_then(|s| s.to_str().ok()));
        assert!(cstr(b"tex").is_none());
        assert!(cstr(b"t\0ex\0").is_none());
    }
}
