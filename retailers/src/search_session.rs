use std::{fmt::Display, sync::Arc};

use common::{
    result::base::{SearchResult, Store},
    utils::total_pages,
};
use tracing::{debug, info, warn};

use crate::{
    errors::{RetailerError, SessionError},
    registry::RetailerRegistry,
};

/// One page of results for the current term at the selected store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub store: Store,
    pub term: String,
    /// 1-indexed
    pub page: u64,
    /// Never less than 1, even without results
    pub total_pages: u64,
    pub result: SearchResult,
}

impl SearchPage {
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    StoreSelected(Store),
    Searching(SearchPage),
}

impl Display for SearchState {
    fn fmt(&self, format: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchState::Idle => write!(format, "no store is selected"),
            SearchState::StoreSelected(store) => write!(format, "{} is selected", store.name),
            SearchState::Searching(page) => write!(
                format,
                "on page {}/{} of {:?}",
                page.page, page.total_pages, page.term
            ),
        }
    }
}

/// How a search or page change turned out.
///
/// A search without matches is an outcome, not an error: the session stays
/// in `Searching` and waits for a new term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { page: u64, total_pages: u64 },
    NoMatches,
}

/// Store selection, searching and paging against one store.
///
/// Transitions take `&mut self`, so a session only ever has one request in
/// flight. A transition whose retailer call fails leaves the state untouched.
pub struct SearchSession {
    registry: Arc<RetailerRegistry>,
    state: SearchState,
}

impl SearchSession {
    pub fn new(registry: Arc<RetailerRegistry>) -> Self {
        Self {
            registry,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn selected_store(&self) -> Option<&Store> {
        match &self.state {
            SearchState::Idle => None,
            SearchState::StoreSelected(store) => Some(store),
            SearchState::Searching(page) => Some(&page.store),
        }
    }

    pub fn current_page(&self) -> Option<&SearchPage> {
        match &self.state {
            SearchState::Searching(page) => Some(page),
            _ => None,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page().is_some_and(SearchPage::has_next_page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page().is_some_and(SearchPage::has_previous_page)
    }

    pub async fn select_store(&mut self, store: Store) -> Result<(), SessionError> {
        if self.state != SearchState::Idle {
            return Err(self.invalid_transition("select a store"));
        }

        self.registry
            .for_retailer(store.retailer)
            .select_store(&store)
            .await?;

        self.state = SearchState::StoreSelected(store);

        Ok(())
    }

    /// Searches from the first page, whatever page the session was on
    pub async fn search(&mut self, term: &str) -> Result<SearchOutcome, SessionError> {
        let Some(store) = self.selected_store().cloned() else {
            return Err(self.invalid_transition("search"));
        };

        info!("Searching {} for {term:?}", store.name);

        self.load_page(store, term.to_string(), 1).await
    }

    pub async fn new_search(&mut self, term: &str) -> Result<SearchOutcome, SessionError> {
        self.search(term).await
    }

    pub async fn next_page(&mut self) -> Result<SearchOutcome, SessionError> {
        let current = match self.current_page() {
            Some(current) if current.has_next_page() => current,
            _ => return Err(self.invalid_transition("go to the next page")),
        };

        let (store, term, page) = (current.store.clone(), current.term.clone(), current.page + 1);

        self.load_page(store, term, page).await
    }

    pub async fn previous_page(&mut self) -> Result<SearchOutcome, SessionError> {
        let current = match self.current_page() {
            Some(current) if current.has_previous_page() => current,
            _ => return Err(self.invalid_transition("go to the previous page")),
        };

        let (store, term, page) = (current.store.clone(), current.term.clone(), current.page - 1);

        self.load_page(store, term, page).await
    }

    async fn load_page(
        &mut self,
        store: Store,
        term: String,
        page: u64,
    ) -> Result<SearchOutcome, SessionError> {
        let result = self
            .registry
            .for_retailer(store.retailer)
            .search_products(&term, &store, page)
            .await?;

        let total_pages = total_pages(result.total_items);
        debug!(
            "Page {page}/{total_pages} holds {} of {} items",
            result.items.len(),
            result.total_items
        );

        // Totals can shrink between pages when the catalogue changes underneath us
        if page > total_pages {
            warn!("Page {page} is past the last page ({total_pages}) for {term:?}");
            return Err(RetailerError::PageOutOfRange { page, total_pages }.into());
        }

        let outcome = match result.is_empty() {
            true => SearchOutcome::NoMatches,
            false => SearchOutcome::Found { page, total_pages },
        };

        self.state = SearchState::Searching(SearchPage {
            store,
            term,
            page,
            total_pages,
            result,
        });

        Ok(outcome)
    }

    fn invalid_transition(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.state.to_string(),
        }
    }
}
