use std::sync::Mutex;

use async_trait::async_trait;
use common::{
    result::{
        base::{Product, SearchResult, Store},
        enums::RetailerName,
    },
    utils::ITEMS_PER_PAGE,
};

use crate::{errors::RetailerError, structures::Retailer};

/// In-memory retailer that serves a fixed catalogue and records every call
pub(crate) struct FakeRetailer {
    retailer: RetailerName,
    store_count: usize,
    total_items: Mutex<u64>,
    fail_listing: bool,
    fail_searches: Mutex<bool>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeRetailer {
    pub(crate) fn new(retailer: RetailerName) -> Self {
        Self {
            retailer,
            store_count: 0,
            total_items: Mutex::new(0),
            fail_listing: false,
            fail_searches: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_stores(mut self, store_count: usize) -> Self {
        self.store_count = store_count;
        self
    }

    pub(crate) fn with_total_items(mut self, total_items: u64) -> Self {
        self.total_items = Mutex::new(total_items);
        self
    }

    pub(crate) fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub(crate) fn set_failing_searches(&self, failing: bool) {
        *self.fail_searches.lock().unwrap() = failing;
    }

    pub(crate) fn set_total_items(&self, total_items: u64) {
        *self.total_items.lock().unwrap() = total_items;
    }

    pub(crate) fn store(&self, index: usize) -> Store {
        Store::new(
            format!("{}-{index}", self.retailer),
            format!("{} store {index}", self.retailer),
            format!("{index} Main Street"),
            self.retailer,
        )
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn upstream_failure() -> RetailerError {
        RetailerError::UpstreamStatus {
            status: 503,
            url: "http://fake.invalid".into(),
        }
    }
}

#[async_trait]
impl Retailer for FakeRetailer {
    fn get_retailer_name(&self) -> RetailerName {
        self.retailer
    }

    async fn list_stores(&self) -> Result<Vec<Store>, RetailerError> {
        self.record("list_stores".into());

        if self.fail_listing {
            return Err(Self::upstream_failure());
        }

        Ok((0..self.store_count).map(|index| self.store(index)).collect())
    }

    async fn select_store(&self, store: &Store) -> Result<(), RetailerError> {
        self.record(format!("select_store {}", store.id));

        Ok(())
    }

    async fn search_products(
        &self,
        term: &str,
        _store: &Store,
        page: u64,
    ) -> Result<SearchResult, RetailerError> {
        self.record(format!("search_products {term} {page}"));

        if *self.fail_searches.lock().unwrap() {
            return Err(Self::upstream_failure());
        }

        let total_items = *self.total_items.lock().unwrap();
        let skipped = (page - 1) * ITEMS_PER_PAGE;
        let count = total_items.saturating_sub(skipped).min(ITEMS_PER_PAGE);

        let items = (0..count)
            .map(|index| Product::new(format!("{term} {}", skipped + index), 100 + index))
            .collect();

        Ok(SearchResult::new(items, total_items))
    }
}
