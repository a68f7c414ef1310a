//! Fixed-size paging over an already ordered sequence.

/// Return the items of 1-based `page` when split into pages of `page_size`.
///
/// Pages past the end yield an empty slice rather than an error. A `page` of 0
/// is treated as the first page; callers reject it before getting here.
pub fn paginate<T>(page: usize, page_size: usize, items: &[T]) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
