//! Pagination of listing results
//!
//! Turns an ordered collection and a 1-indexed page number into a bounded
//! [`Page`] with navigation metadata. Out-of-range page numbers are clamped
//! to the nearest valid page instead of being rejected.

use serde::{Deserialize, Serialize};

/// Number of items on every page
pub const PAGE_SIZE: usize = 10;

/// One page of an ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, at most the page size
    pub items: Vec<T>,
    /// The effective 1-indexed page number after clamping
    pub page_number: usize,
    /// `ceil(total_items / page size)`; zero for an empty collection
    pub total_pages: usize,
    /// Number of items across all pages
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Clamps a requested page number into `1..=total_pages`
///
/// An empty collection has no pages, and every request resolves to page 1.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    if requested < 1 || total_pages == 0 {
        return 1;
    }
    usize::try_from(requested).map_or(total_pages, |page| page.min(total_pages))
}

impl<T> Page<T> {
    /// Paginates `items` with the standard page size
    pub fn paginate(items: Vec<T>, requested: i64) -> Self {
        Self::paginate_by(items, requested, PAGE_SIZE)
    }

    /// Paginates `items` with an explicit page size
    ///
    /// ### Arguments
    ///
    /// * `items` - The full ordered collection
    /// * `requested` - The requested 1-indexed page number, clamped if out of range
    /// * `per_page` - Items per page; zero is treated as one
    pub fn paginate_by(items: Vec<T>, requested: i64, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page);
        let page_number = clamp_page(requested, total_pages);

        let items: Vec<T> = items
            .into_iter()
            .skip((page_number - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            page_number,
            total_pages,
            total_items,
            has_next: page_number < total_pages,
            has_prev: page_number > 1,
        }
    }

    /// Converts the items of the page, keeping its metadata
    ///
    /// Stops at the first failing item.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<U>, E>>()?;
        Ok(Page {
            items,
            page_number: self.page_number,
            total_pages: self.total_pages,
            total_items: self.total_items,
            has_next: self.has_next,
            has_prev: self.has_prev,
        })
    }
}
