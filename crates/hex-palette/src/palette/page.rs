//! Pagination over a generated permutation set

use super::ColorCode;

/// One page of a permutation set plus display metadata
///
/// Ordinals are 1-based and inclusive; an empty page has
/// `end_ordinal = 0 < start_ordinal = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: &'a [ColorCode],
    /// Page number after clamping, 1-based
    pub number: usize,
    /// `ceil(len / page_size)`; 0 for an empty set
    pub total_pages: usize,
    pub start_ordinal: usize,
    pub end_ordinal: usize,
}

/// Slice `set` into the requested page
///
/// An out-of-range `page_number` is clamped to the nearest valid page rather
/// than signaled as an error. Non-positive `page_size`/`page_number` are
/// contract violations and panic.
pub fn paginate(set: &[ColorCode], page_size: usize, page_number: usize) -> Page<'_> {
    assert!(page_size >= 1, "page_size must be positive");
    assert!(page_number >= 1, "page_number must be positive");

    let total_pages = set.len().div_ceil(page_size);
    let number = page_number.min(total_pages.max(1));
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(set.len());
    let items = &set[start..end];

    Page {
        items,
        number,
        total_pages,
        start_ordinal: start + 1,
        end_ordinal: start + items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{generate, Alphabet};

    fn set_of(len: usize) -> Vec<ColorCode> {
        // 46,656 codes; more than enough for any slice under test
        let codes = generate(&Alphabet::parse("012345"));
        codes[..len].to_vec()
    }

    #[test]
    fn test_first_page_of_400() {
        let set = set_of(400);
        let page = paginate(&set, 150, 1);
        assert_eq!(page.items, &set[0..150]);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.start_ordinal, 1);
        assert_eq!(page.end_ordinal, 150);
    }

    #[test]
    fn test_short_last_page() {
        let set = set_of(400);
        let page = paginate(&set, 150, 3);
        assert_eq!(page.items.len(), 100);
        assert_eq!(page.items, &set[300..400]);
        assert_eq!(page.start_ordinal, 301);
        assert_eq!(page.end_ordinal, 400);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let set = set_of(400);
        let page = paginate(&set, 150, 99);
        assert_eq!(page.number, 3);
        assert_eq!(page.items.len(), 100);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_page() {
        let set = set_of(300);
        assert_eq!(paginate(&set, 150, 1).total_pages, 2);
        assert_eq!(paginate(&set, 150, 2).items.len(), 150);
    }

    #[test]
    fn test_empty_set_convention() {
        let page = paginate(&[], 150, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.start_ordinal, 1);
        assert_eq!(page.end_ordinal, 0);
    }

    #[test]
    fn test_single_item_set() {
        let set = set_of(1);
        let page = paginate(&set, 150, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.start_ordinal, 1);
        assert_eq!(page.end_ordinal, 1);
    }

    #[test]
    #[should_panic(expected = "page_size must be positive")]
    fn test_zero_page_size_panics() {
        let set = set_of(10);
        let _ = paginate(&set, 0, 1);
    }

    #[test]
    #[should_panic(expected = "page_number must be positive")]
    fn test_zero_page_number_panics() {
        let set = set_of(10);
        let _ = paginate(&set, 150, 0);
    }
}
