// src/utils/pagination.rs

/// Page size for every question listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parses the `page` query parameter. 1-based; absent, non-numeric or
/// zero values all fall back to page 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|p| p.parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

/// Returns the window `[(page - 1) * 10, page * 10)` over `items`,
/// clamped to the collection length. A page past the end yields an empty
/// slice; listing endpoints treat that as not-found.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE).min(items.len());
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
