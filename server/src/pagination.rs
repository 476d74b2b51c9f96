use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// `?page=N` query parameter, 1-indexed, defaulting to the first page.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Slice covering `(page-1)*page_size .. page*page_size`. Out-of-range
/// pages, including `page <= 0`, yield an empty slice rather than an error.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = (page as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + page_size, items.len());
    &items[start..end]
}
