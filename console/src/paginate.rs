use anyhow::{ensure, Result};

/// Splits items into fixed-size pages for display; the last page may be
/// shorter than `page_size`.
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Vec<&[T]>> {
    ensure!(page_size > 0, "page size must be positive");
    Ok(items.chunks(page_size).collect())
}
