//! Page-number to record-index-range mapping.
//!
//! The first page carries 20 records, every later page 10. Windows for
//! consecutive pages are contiguous and non-overlapping, so concatenating
//! pages 1..N reproduces exactly the records a single direct range
//! generation over `[1, 20 + 10*(N-1)]` would produce.

use crate::error::GenerateError;

/// Number of records on the first page.
pub const FIRST_PAGE_SIZE: u64 = 20;

/// Number of records on every page after the first.
pub const PAGE_SIZE: u64 = 10;

/// The absolute record-index range one page materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based absolute index of the first record on the page
    pub start_index: u64,

    /// Number of records on the page
    pub count: u64,
}

impl PageWindow {
    /// Iterate the absolute record indexes of this window, ascending.
    pub fn indexes(&self) -> std::ops::RangeInclusive<u64> {
        self.start_index..=self.start_index + self.count - 1
    }
}

/// Map a 1-based page number to its record-index window.
///
/// Page 0 is rejected; there is no upper bound on the page number.
pub fn page_window(page: u64) -> Result<PageWindow, GenerateError> {
    match page {
        0 => Err(GenerateError::InvalidPage(0)),
        1 => Ok(PageWindow {
            start_index: 1,
            count: FIRST_PAGE_SIZE,
        }),
        p => Ok(PageWindow {
            start_index: FIRST_PAGE_SIZE + 1 + (p - 2) * PAGE_SIZE,
            count: PAGE_SIZE,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_table() {
        assert_eq!(
            page_window(1).unwrap(),
            PageWindow {
                start_index: 1,
                count: 20
            }
        );
        assert_eq!(
            page_window(2).unwrap(),
            PageWindow {
                start_index: 21,
                count: 10
            }
        );
        assert_eq!(
            page_window(3).unwrap(),
            PageWindow {
                start_index: 31,
                count: 10
            }
        );
        assert_eq!(
            page_window(10).unwrap(),
            PageWindow {
                start_index: 101,
                count: 10
            }
        );
    }

    #[test]
    fn test_page_zero_rejected() {
        assert_eq!(page_window(0), Err(GenerateError::InvalidPage(0)));
    }

    #[test]
    fn test_windows_are_contiguous() {
        let mut next_expected = 1;
        for page in 1..=50 {
            let window = page_window(page).unwrap();
            assert_eq!(window.start_index, next_expected);
            next_expected = window.start_index + window.count;
        }
    }

    #[test]
    fn test_indexes_iteration() {
        let window = page_window(2).unwrap();
        let indexes: Vec<u64> = window.indexes().collect();
        assert_eq!(indexes, (21..=30).collect::<Vec<u64>>());
    }
}
