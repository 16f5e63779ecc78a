//! Fixed-size color code produced by the generator

use std::fmt;

use super::CODE_LEN;

/// One 6-hex-digit RGB color code (e.g. `a1a1a1`), without the leading `#`
///
/// Codes are only constructed by the generator from a validated [`Alphabet`],
/// so the bytes are always lowercase ASCII hex digits.
///
/// [`Alphabet`]: super::Alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode([u8; CODE_LEN]);

impl ColorCode {
    pub(crate) const fn new(bytes: [u8; CODE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_str(&self) -> &str {
        // Bytes are ASCII hex digits by construction
        std::str::from_utf8(&self.0).unwrap_or("000000")
    }

    /// Decode the R, G, B channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| hex_val(self.0[i]) * 16 + hex_val(self.0[i + 1]);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn hex_val(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips_bytes() {
        let code = ColorCode::new(*b"a1b2c3");
        assert_eq!(code.as_str(), "a1b2c3");
        assert_eq!(code.to_string(), "a1b2c3");
    }

    #[test]
    fn test_rgb_channels() {
        assert_eq!(ColorCode::new(*b"ff8000").rgb(), (255, 128, 0));
        assert_eq!(ColorCode::new(*b"000000").rgb(), (0, 0, 0));
        assert_eq!(ColorCode::new(*b"ffffff").rgb(), (255, 255, 255));
    }
}
