//! Client-side filtering and pagination over an already fetched listing set.
//!
//! DESIGN
//! ======
//! The browse screen fetches every listing once and narrows it locally. This
//! assumes a small catalogue; nothing here talks to the server.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{VisaCategory, VisaListing};

/// Listings per page on the browse screen.
pub const BROWSE_PAGE_SIZE: usize = 8;

/// Listings shown in the home page "latest" strip.
pub const LATEST_LIMIT: usize = 6;

/// Country substring plus optional category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisaFilter {
    pub query: String,
    pub category: Option<VisaCategory>,
}

impl VisaFilter {
    /// Case-insensitive country substring match and exact category match.
    pub fn matches(&self, visa: &VisaListing) -> bool {
        let query = self.query.trim().to_lowercase();
        let country_ok = query.is_empty() || visa.country.to_lowercase().contains(&query);
        let category_ok = self.category.as_ref().is_none_or(|category| visa.category == *category);
        country_ok && category_ok
    }
}

/// Filtered subsequence, preserving fetch order.
pub fn filter_visas<'a>(visas: &'a [VisaListing], filter: &VisaFilter) -> Vec<&'a VisaListing> {
    visas.iter().filter(|visa| filter.matches(visa)).collect()
}

/// `ceil(total / page_size)`; zero items means zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { total.div_ceil(page_size) }
}

/// Items on 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Browse-screen state: the fetched set, the active filter, and the page.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseState {
    pub visas: Vec<VisaListing>,
    pub filter: VisaFilter,
    /// 1-based current page.
    pub page: usize,
    pub page_size: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self { visas: Vec::new(), filter: VisaFilter::default(), page: 1, page_size: BROWSE_PAGE_SIZE }
    }
}

impl BrowseState {
    pub fn new(visas: Vec<VisaListing>) -> Self {
        Self { visas, ..Self::default() }
    }

    /// Changing the query resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.page = 1;
    }

    /// Changing the category resets to page 1.
    pub fn set_category(&mut self, category: Option<VisaCategory>) {
        self.filter.category = category;
        self.page = 1;
    }

    /// Jump to a page, clamped to the valid range.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn filtered(&self) -> Vec<&VisaListing> {
        filter_visas(&self.visas, &self.filter)
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.filtered().len(), self.page_size)
    }

    /// Listings on the current page.
    pub fn visible(&self) -> Vec<VisaListing> {
        let filtered = self.filtered();
        page_slice(&filtered, self.page, self.page_size)
            .iter()
            .map(|visa| (*visa).clone())
            .collect()
    }

    /// Pager is only worth showing when results overflow one page.
    pub fn show_pagination(&self) -> bool {
        self.filtered().len() > self.page_size
    }
}
