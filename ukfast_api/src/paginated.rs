//! One page of a collection, able to fetch its siblings.

use serde::de::DeserializeOwned;

use crate::{
    client::Client,
    request::ClientRequestParameters,
    types::{ClientResponse, Pagination},
    Error,
};

/// Paging position derived from the response metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Items across all pages, as reported by the API.
    pub total: u64,
    /// Items on this page.
    pub count: u64,
    pub per_page: u64,
    /// 1-indexed.
    pub current_page: u64,
    pub total_pages: u64,
}

impl PageMeta {
    /// Builds metadata from the response, or describes a single complete
    /// page when the response carried no pagination block.
    pub fn from_pagination(pagination: Option<&Pagination>, item_count: usize) -> Self {
        let count = item_count as u64;
        match pagination {
            Some(p) => Self {
                total: p.total,
                count,
                per_page: p.per_page,
                current_page: p.current_page.max(1),
                total_pages: p.total_pages,
            },
            None => Self {
                total: count,
                count,
                per_page: count,
                current_page: 1,
                total_pages: 1,
            },
        }
    }

    /// Number of items on the pages before this one.
    pub fn offset(&self) -> u64 {
        self.current_page.saturating_sub(1) * self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// A single page of `T`, bound to the request that produced it.
///
/// Holds a borrowed [`Client`] and the path and parameters of the original
/// request, so [`next_page`](Self::next_page) and friends fetch siblings
/// without the caller re-specifying anything. Navigation returns a new
/// `Paginated`; earlier pages are not retained.
///
/// Navigating past either end (`next_page` when [`has_next`](Self::has_next)
/// is false, `previous_page` when [`has_previous`](Self::has_previous) is
/// false) returns an empty page without touching the network. The page after
/// the last reports no next page. The page before the first is page 0: it
/// reports no previous page, and its `next_page` fetches page 1.
#[derive(Debug)]
pub struct Paginated<'c, T> {
    client: &'c Client,
    path: String,
    parameters: Option<ClientRequestParameters>,
    items: Vec<T>,
    meta: PageMeta,
}

impl<'c, T> Paginated<'c, T> {
    /// Builds a page from a decoded response. A response without `data` yields an empty page.
    pub fn new(
        client: &'c Client,
        path: impl Into<String>,
        parameters: Option<ClientRequestParameters>,
        response: ClientResponse<Vec<T>>,
    ) -> Self {
        let pagination = response.pagination().cloned();
        let items = response.into_data().unwrap_or_default();
        let meta = PageMeta::from_pagination(pagination.as_ref(), items.len());
        Self {
            client,
            path: path.into(),
            parameters,
            items,
            meta,
        }
    }

    /// Items on this page in the order the API returned them.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameters(&self) -> Option<&ClientRequestParameters> {
        self.parameters.as_ref()
    }

    pub fn current_page(&self) -> u64 {
        self.meta.current_page
    }

    pub fn per_page(&self) -> u64 {
        self.meta.per_page
    }

    pub fn total_items(&self) -> u64 {
        self.meta.total
    }

    pub fn total_pages(&self) -> u64 {
        self.meta.total_pages
    }

    pub fn offset(&self) -> u64 {
        self.meta.offset()
    }

    pub fn has_next(&self) -> bool {
        self.meta.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.meta.has_previous()
    }

    fn parameters_for(&self, page: u64) -> ClientRequestParameters {
        self.parameters
            .clone()
            .unwrap_or_default()
            .for_page(page, Some(self.meta.per_page))
    }

    fn empty_at(&self, page: u64) -> Paginated<'c, T> {
        Paginated {
            client: self.client,
            path: self.path.clone(),
            parameters: Some(self.parameters_for(page)),
            items: Vec::new(),
            meta: PageMeta {
                count: 0,
                current_page: page,
                ..self.meta
            },
        }
    }
}

impl<'c, T: DeserializeOwned> Paginated<'c, T> {
    async fn fetch(&self, page: u64) -> Result<Paginated<'c, T>, Error> {
        let client: &'c Client = self.client;
        client
            .get_paginated(&self.path, Some(self.parameters_for(page)))
            .await
    }

    /// Fetches the following page.
    pub async fn next_page(&self) -> Result<Paginated<'c, T>, Error> {
        let page = self.meta.current_page + 1;
        if !self.has_next() {
            return Ok(self.empty_at(page));
        }
        self.fetch(page).await
    }

    /// Fetches the preceding page. Before the first page this is an empty page 0.
    pub async fn previous_page(&self) -> Result<Paginated<'c, T>, Error> {
        if !self.has_previous() {
            return Ok(self.empty_at(0));
        }
        self.fetch(self.meta.current_page - 1).await
    }

    pub async fn first_page(&self) -> Result<Paginated<'c, T>, Error> {
        self.fetch(1).await
    }

    /// Fetches the last page reported by the metadata, or page 1 for an empty collection.
    pub async fn last_page(&self) -> Result<Paginated<'c, T>, Error> {
        self.fetch(self.meta.total_pages.max(1)).await
    }
}

impl<'c, T> IntoIterator for Paginated<'c, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 'c, T> IntoIterator for &'a Paginated<'c, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
