//! Page-number windowing shared by every paginated listing.

use serde::{Deserialize, Serialize};

/// Derived window descriptor: boundary flags and neighbouring page numbers
/// for a `(page, page_size, total)` triple. Pure arithmetic, no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

/// Compute the window descriptor for one page of a listing.
///
/// `has_next` uses strict `<`: a page that ends exactly on the last item
/// has no next page.
pub fn paginate(page: u64, page_size: u64, total: u64) -> PageInfo {
    // Saturating arithmetic: a saturated product can never be below
    // `total`, so an absurdly large page number falls out as "no next
    // page" instead of wrapping.
    let has_next = page.saturating_mul(page_size) < total;
    let has_prev = page > 1;
    PageInfo {
        page,
        page_size,
        total,
        has_next,
        has_prev,
        next_page: has_next.then(|| page.saturating_add(1)),
        prev_page: has_prev.then(|| page - 1),
    }
}

/// Row offset for a 1-based page number. Saturates rather than wraps, so
/// an out-of-range page lands past the end and yields an empty window.
pub fn offset(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// One page of items together with its window descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total: u64) -> Self {
        Self {
            items,
            info: paginate(page, page_size, total),
        }
    }
}
