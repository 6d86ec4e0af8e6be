//! Hex digests for puzzles that mine or walk hashes.

/// Lowercase hexadecimal MD5 digest of `input`.
///
/// ```
/// assert_eq!(puzzle_utils::hash::md5("abc"), "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn md5(input: &str) -> String {
    format!("{:x}", ::md5::compute(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_empty_input() {
        assert_eq!(md5(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_is_lowercase_hex() {
        let digest = md5("The quick brown fox jumps over the lazy dog");
        assert_eq!(digest, "9e107d9d372bb6826bd81d3542a419d6");
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn test_md5_mined_number_has_five_leading_zeros() {
        assert!(md5("abcdef609043").starts_with("00000"));
        assert!(!md5("abcdef609042").starts_with("00000"));
    }
}
