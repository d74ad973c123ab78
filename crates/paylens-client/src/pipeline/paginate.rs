/// One page window over a filtered, sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub start_index: usize,
}

/// Deterministic page-window extraction. Pages are 1-based; a requested
/// page past the end clamps to the last page instead of rendering empty,
/// and an empty sequence still reports one (empty) page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(size).max(1);
    let current_page = page.clamp(1, total_pages);
    let start_index = (current_page - 1) * size;
    let end_index = (start_index + size).min(total);

    let window = if start_index < total {
        items[start_index..end_index].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: window,
        current_page,
        total_pages,
        total,
        start_index,
    }
}
