//! Page slicing and page-control metadata.
//!
//! Pages are 1-based. A request outside `1..=total_pages` is an error here;
//! the view-state controller clamps before it asks.

use crate::shared::list_engine::error::ListError;
use serde::{Deserialize, Serialize};

/// Numbered pages rendered without collapsing
const MAX_PLAIN_PAGES: usize = 5;

/// Entry of the page control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// One page of a filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based; 0 for an empty collection
    pub start_item: usize,
    /// 1-based, inclusive; 0 for an empty collection
    pub end_item: usize,
    pub page_numbers: Vec<PageMarker>,
}

impl<R> Page<R> {
    /// A single page needs no page control
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }
}

/// `max(1, ceil(total_items / page_size))`
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Slice `collection` to page `page` (1-based).
pub fn paginate<R: Clone>(collection: &[R], page_size: usize, page: usize) -> Result<Page<R>, ListError> {
    if page_size == 0 {
        return Err(ListError::InvalidPageSize);
    }

    let total_items = collection.len();
    let total = total_pages(total_items, page_size);
    if page == 0 || page > total {
        return Err(ListError::PageOutOfRange {
            requested: page,
            total_pages: total,
        });
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = collection.get(start..end).unwrap_or(&[]).to_vec();

    let (start_item, end_item) = if total_items == 0 {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Ok(Page {
        items,
        current_page: page,
        total_pages: total,
        total_items,
        start_item,
        end_item,
        page_numbers: page_numbers(page, total),
    })
}

/// Page control entries: first and last page always present, up to three
/// pages around `current`, ellipsis for the gaps once there are more than
/// five pages.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= MAX_PLAIN_PAGES {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut pages = vec![PageMarker::Page(1)];

    if current > 3 {
        pages.push(PageMarker::Ellipsis);
    }

    let range_start = current.saturating_sub(1).max(2);
    let range_end = (current + 1).min(total_pages - 1);
    pages.extend((range_start..=range_end).map(PageMarker::Page));

    if current + 2 < total_pages {
        pages.push(PageMarker::Ellipsis);
    }

    pages.push(PageMarker::Page(total_pages));
    pages
}
