//! Permutation generation over a hex alphabet

use super::{Alphabet, ColorCode, CODE_LEN, MAX_ALPHABET_LEN};

/// Generate every 6-character code drawable from `alphabet` with repetition
///
/// Codes are enumerated in base-n counting order with n = alphabet length:
/// the leftmost position varies slowest, the rightmost fastest, and digits
/// are taken from the alphabet in the order given. For n >= 1 the output has
/// exactly n^6 entries; duplicate alphabet characters produce coinciding
/// codes, one per generating digit tuple. An empty alphabet yields an empty
/// vec.
///
/// Pure and deterministic; calling twice with the same alphabet yields
/// element-wise identical output.
pub fn generate(alphabet: &Alphabet) -> Vec<ColorCode> {
    let digits = alphabet.digits();
    debug_assert!(digits.len() <= MAX_ALPHABET_LEN);
    if digits.is_empty() {
        return Vec::new();
    }

    let n = digits.len();
    let mut codes = Vec::with_capacity(n.pow(CODE_LEN as u32));
    let mut odometer = [0usize; CODE_LEN];
    'emit: loop {
        let mut bytes = [0u8; CODE_LEN];
        for (byte, &i) in bytes.iter_mut().zip(&odometer) {
            *byte = digits[i];
        }
        codes.push(ColorCode::new(bytes));

        // Increment rightmost position first, carrying left
        for pos in (0..CODE_LEN).rev() {
            odometer[pos] += 1;
            if odometer[pos] < n {
                continue 'emit;
            }
            odometer[pos] = 0;
        }
        break;
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(input: &str) -> Vec<ColorCode> {
        generate(&Alphabet::parse(input))
    }

    #[test]
    fn test_empty_alphabet_yields_nothing() {
        assert!(gen("").is_empty());
    }

    #[test]
    fn test_single_char_repeats_six_times() {
        let codes = gen("a");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].as_str(), "aaaaaa");
    }

    #[test]
    fn test_two_chars_count_and_shape() {
        let codes = gen("01");
        assert_eq!(codes.len(), 64);
        for code in &codes {
            assert_eq!(code.as_str().len(), 6);
            assert!(code.as_str().chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn test_base_two_counting_order() {
        let codes = gen("01");
        let prefix: Vec<&str> = codes.iter().take(5).map(|c| c.as_str()).collect();
        assert_eq!(
            prefix,
            vec!["000000", "000001", "000010", "000011", "000100"]
        );
        assert_eq!(codes.last().map(|c| c.as_str()), Some("111111"));
    }

    #[test]
    fn test_leftmost_position_varies_slowest() {
        let codes = gen("ab");
        // First half starts with 'a', second half with 'b'
        assert!(codes[..32].iter().all(|c| c.as_str().starts_with('a')));
        assert!(codes[32..].iter().all(|c| c.as_str().starts_with('b')));
    }

    #[test]
    fn test_sixth_power_growth() {
        for (input, n) in [("01", 2usize), ("abc", 3), ("0123", 4), ("abcdef", 6)] {
            assert_eq!(gen(input).len(), n.pow(6));
        }
    }

    #[test]
    fn test_distinct_alphabet_has_no_duplicate_codes() {
        let codes = gen("012");
        let mut seen = std::collections::HashSet::new();
        for code in &codes {
            assert!(seen.insert(*code));
        }
    }

    #[test]
    fn test_repeated_alphabet_counts_multiplicities() {
        let codes = gen("aa");
        assert_eq!(codes.len(), 64);
        // Every generated tuple collapses to the same string
        assert!(codes.iter().all(|c| c.as_str() == "aaaaaa"));
    }

    #[test]
    fn test_idempotent() {
        let alphabet = Alphabet::parse("b4");
        assert_eq!(generate(&alphabet), generate(&alphabet));
    }
}
