use serde::Serialize;

/// Page size used by the listing views when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

/// One page of an already filtered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Number of pages for `total_items`; never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize);
    }
    Ok(total_items.div_ceil(page_size).max(1))
}

/// Slice out `requested_page` (1-based). Out-of-range pages clamp to the first or last page.
pub fn paginate<T: Clone>(
    items: &[T],
    page_size: usize,
    requested_page: i64,
) -> Result<Page<T>, PaginationError> {
    let total_pages = total_pages(items.len(), page_size)?;
    let page = usize::try_from(requested_page.max(1))
        .unwrap_or(usize::MAX)
        .min(total_pages);

    let start = (page - 1) * page_size;
    let end = start.saturating_add(page_size).min(items.len());
    let items_on_page = items.get(start..end).unwrap_or_default().to_vec();

    Ok(Page {
        items: items_on_page,
        page,
        page_size,
        total_pages,
        total_items: items.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_one_page() {
        let page = paginate::<u8>(&[], 12, 1).expect("valid page size");
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items: Vec<u32> = (1..=25).collect();
        let first = paginate(&items, 10, 1).expect("page");
        let below = paginate(&items, 10, 0).expect("page");
        let negative = paginate(&items, 10, -4).expect("page");
        assert_eq!(first, below);
        assert_eq!(first, negative);

        let last = paginate(&items, 10, 3).expect("page");
        let beyond = paginate(&items, 10, 99).expect("page");
        let huge = paginate(&items, 10, i64::MAX).expect("page");
        assert_eq!(last, beyond);
        assert_eq!(last, huge);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(last.has_previous());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(
            paginate(&[1, 2, 3], 0, 1),
            Err(PaginationError::InvalidPageSize)
        );
        assert_eq!(total_pages(3, 0), Err(PaginationError::InvalidPageSize));
    }

    #[test]
    fn map_preserves_paging_metadata() {
        let page = paginate(&[1, 2, 3], 2, 2).expect("page").map(|n| n * 10);
        assert_eq!(page.items, vec![30]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_items, 3);
    }
}
