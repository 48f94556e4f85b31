//! Pagination Utilities
//!
//! Page slicing and the sliding window of page buttons. Pages are 1-indexed.

use std::ops::RangeInclusive;

/// Number of pages needed for `count` items (0 when there are none)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Items on `page`; empty when the page lies past the end
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page buttons around `current`: `[max(current-radius, 1), min(current+radius, total)]`
pub fn page_range(current: usize, total: usize, radius: usize) -> RangeInclusive<usize> {
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total);
    // An empty RangeInclusive when total == 0 or start overshoots
    start..=end
}

/// Keep `page` within `[1, total]`, never below 1
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.min(total).max(1)
}

/// Move `step` pages forward or backward, saturating at the ends
pub fn skip(current: usize, direction: SkipDirection, step: usize, total: usize) -> usize {
    if total < 1 {
        return current.max(1);
    }
    let target = match direction {
        SkipDirection::Back => current.saturating_sub(step),
        SkipDirection::Forward => current.saturating_add(step),
    };
    clamp_page(target, total)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Back,
    Forward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(300, 10), 30);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_slice_lengths() {
        let items: Vec<u32> = (1..=37).collect();
        let pages = total_pages(items.len(), 10);
        assert_eq!(pages, 4);

        for page in 1..pages {
            assert_eq!(page_slice(&items, page, 10).len(), 10);
        }
        assert_eq!(page_slice(&items, pages, 10).len(), 7);

        let even: Vec<u32> = (1..=30).collect();
        assert_eq!(page_slice(&even, 3, 10).len(), 10);
    }

    #[test]
    fn test_slice_contents_and_bounds() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 2, 10), &[11, 12]);
        assert!(page_slice(&items, 3, 10).is_empty());
        assert_eq!(page_slice(&items, 0, 10), page_slice(&items, 1, 10));

        let empty: Vec<u32> = Vec::new();
        assert!(page_slice(&empty, 1, 10).is_empty());
    }

    #[test]
    fn test_page_range_window() {
        assert_eq!(page_range(1, 2, 5), 1..=2);
        assert_eq!(page_range(1, 30, 5), 1..=6);
        assert_eq!(page_range(15, 30, 5), 10..=20);
        assert_eq!(page_range(30, 30, 5), 25..=30);
        assert_eq!(page_range(1, 0, 5).count(), 0);
    }

    #[test]
    fn test_page_range_never_exceeds_bounds() {
        for total in 0..40 {
            for current in 1..=total.max(1) {
                let window: Vec<usize> = page_range(current, total, 5).collect();
                assert!(window.len() <= 11);
                assert!(window.iter().all(|&p| p >= 1 && p <= total));
            }
        }
    }

    #[test]
    fn test_skip_saturates() {
        assert_eq!(skip(1, SkipDirection::Forward, 5, 30), 6);
        assert_eq!(skip(28, SkipDirection::Forward, 5, 30), 30);
        assert_eq!(skip(30, SkipDirection::Forward, 5, 30), 30);
        assert_eq!(skip(8, SkipDirection::Back, 5, 30), 3);
        assert_eq!(skip(3, SkipDirection::Back, 5, 30), 1);
        assert_eq!(skip(1, SkipDirection::Back, 5, 30), 1);

        let mut page = 1;
        for _ in 0..10 {
            page = skip(page, SkipDirection::Forward, 5, 12);
        }
        assert_eq!(page, 12);
    }

    #[test]
    fn test_skip_inert_without_pages() {
        assert_eq!(skip(1, SkipDirection::Forward, 5, 0), 1);
        assert_eq!(skip(1, SkipDirection::Back, 5, 0), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(2, 4), 2);
    }
}
