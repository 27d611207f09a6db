//! List View State
//!
//! Items, loading flag, filter text and current page. Everything shown in the
//! table is derived from these and never persisted.

use std::ops::Range;

use crate::domain::Entity;

/// Rows per pagination page
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct ListView<E> {
    items: Vec<E>,
    loading: bool,
    filter_text: String,
    /// 1-based
    current_page: usize,
    page_size: usize,
}

/// One table row with its serial number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRow<'a, E> {
    pub serial: usize,
    pub item: &'a E,
}

/// The slice of the filtered list currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, E> {
    pub number: usize,
    pub total_pages: usize,
    pub rows: Vec<PageRow<'a, E>>,
}

impl<E> Default for ListView<E> {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl<E: Entity> ListView<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> ListView<E> {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            filter_text: String::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

impl<E: Entity> ListView<E> {
    /// Replace the items, pulling the current page back if it no longer exists.
    pub fn set_items(&mut self, items: Vec<E>) {
        self.items = items;
        self.set_page(self.current_page);
    }

    /// Changing the filter always goes back to the first page.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.current_page = 1;
    }

    /// Jump to `page`, clamped to the pages that exist
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn filtered(&self) -> Vec<&E> {
        filter_items(&self.items, &self.filter_text)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn page(&self) -> Page<'_, E> {
        let filtered = self.filtered();
        let bounds = page_bounds(self.current_page, self.page_size, filtered.len());
        let first_serial = bounds.start + 1;
        let rows = filtered[bounds]
            .iter()
            .enumerate()
            .map(|(index, item)| PageRow {
                serial: first_serial + index,
                item: *item,
            })
            .collect();

        Page {
            number: self.current_page,
            total_pages: total_pages(filtered.len(), self.page_size),
            rows,
        }
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }
}

/// Items matching `query` case-insensitively; an empty query keeps everything.
pub fn filter_items<'a, E: Entity>(items: &'a [E], query: &str) -> Vec<&'a E> {
    let needle = query.to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Index range of `page` (1-based; 0 behaves like 1) within `len` items.
/// Pages past the end are empty.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}
