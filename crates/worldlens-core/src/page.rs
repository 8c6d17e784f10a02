// crates/worldlens-core/src/page.rs

/// One visible page of a result set, borrowed from the full slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    /// Whether pagination controls should exist at all; the UI hides them
    /// entirely (not merely disables them) at a single page.
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

/// Slice out the 1-based `page` of `results`.
///
/// `total_pages` is `ceil(len / page_size)` — 0 when `results` is empty.
/// A page past the end yields an empty slice rather than an error;
/// clamping the page back into range after the result set changes is the
/// caller's job, not the slicer's.
pub fn slice<T>(results: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    if page_size == 0 || page == 0 {
        return Page {
            items: &[],
            total_pages: if page_size == 0 { 0 } else { results.len().div_ceil(page_size) },
        };
    }
    let total_pages = results.len().div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(results.len());
    let end = start.saturating_add(page_size).min(results.len());
    Page {
        items: &results[start..end],
        total_pages,
    }
}
