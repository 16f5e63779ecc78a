//! Validated generation alphabet

use super::MAX_ALPHABET_LEN;

/// An ordered sequence of 0-6 lowercase hex digits used as generation symbols
///
/// This is the input boundary for the generator: `parse` lowercases, drops
/// anything outside 0-9/a-f, and truncates to [`MAX_ALPHABET_LEN`]. Repeated
/// characters are kept in place (the generator counts multiplicities).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet(String);

impl Alphabet {
    /// Sanitize raw user input into a valid alphabet
    pub fn parse(input: &str) -> Self {
        let digits = input
            .chars()
            .filter(|c| c.is_ascii_hexdigit())
            .map(|c| c.to_ascii_lowercase())
            .take(MAX_ALPHABET_LEN)
            .collect();
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Alphabet digits as ASCII bytes, in the order given by the user
    pub(crate) fn digits(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_valid_digits() {
        assert_eq!(Alphabet::parse("a10").as_str(), "a10");
        assert_eq!(Alphabet::parse("0123456789").as_str(), "012345");
    }

    #[test]
    fn test_parse_lowercases() {
        assert_eq!(Alphabet::parse("AbCdEf").as_str(), "abcdef");
    }

    #[test]
    fn test_parse_drops_non_hex() {
        assert_eq!(Alphabet::parse("g a-1 z!").as_str(), "a1");
        assert_eq!(Alphabet::parse("xyz").as_str(), "");
    }

    #[test]
    fn test_parse_truncates_after_filtering() {
        // Invalid characters do not count toward the cap
        assert_eq!(Alphabet::parse("z0z1z2z3z4z5z6").as_str(), "012345");
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(Alphabet::parse("aa").as_str(), "aa");
        assert_eq!(Alphabet::parse("aa").len(), 2);
    }
}
