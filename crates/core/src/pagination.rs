//! Page/limit clamping shared by list queries.

/// Default page number when the caller omits or zeroes it.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the caller omits or zeroes the limit.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on page size to keep list queries bounded.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a caller-supplied page number: non-positive or absent means page 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    match page {
        Some(p) if p > 0 => p,
        _ => DEFAULT_PAGE,
    }
}

/// Clamp a caller-supplied limit: non-positive or absent means the default,
/// and anything above [`MAX_LIMIT`] is capped.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(l) if l > 0 => l.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// Row offset for the given (already clamped) page and limit.
///
/// Saturates instead of overflowing so an absurd page number yields an
/// offset past every row (an empty page) rather than a panic or a negative
/// OFFSET rejected by Postgres.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}
