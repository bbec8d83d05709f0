use serde::Serialize;

/// Pagination metadata for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

/// Slice out one page of `items`.
///
/// Pages are 1-based. Requests past the last page return an empty item
/// list with correct metadata. Degenerate-input policy: `page` or
/// `per_page` of zero is lifted to 1 rather than dividing by zero.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);

    let total_items = items.len();
    // Ceiling division
    let total_pages = (total_items + per_page - 1) / per_page;

    let start = (page - 1).saturating_mul(per_page);
    let page_items = if start >= total_items {
        Vec::new()
    } else {
        items[start..(start + per_page).min(total_items)].to_vec()
    };

    Page {
        items: page_items,
        pagination: PageInfo {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}
