use std::sync::Arc;

use async_trait::async_trait;
use common::{
    result::{
        base::{SearchResult, Store},
        enums::RetailerName,
    },
    utils::ITEMS_PER_PAGE,
};
use crawler::request::Request;
use tracing::{debug, error, info, trace, warn};

use crate::{
    errors::RetailerError,
    session_store::SessionStore,
    structures::{Retailer, RetailerApi},
};

/// Drives a `RetailerApi` over the retailer's own session
pub struct RetailerClient {
    api: Box<dyn RetailerApi>,
    sessions: Arc<SessionStore>,
}

impl RetailerClient {
    pub fn new(api: Box<dyn RetailerApi>, sessions: Arc<SessionStore>) -> Self {
        Self { api, sessions }
    }

    fn check_store(&self, store: &Store) -> Result<(), RetailerError> {
        if store.retailer != self.get_retailer_name() {
            return Err(RetailerError::WrongRetailer {
                store_id: store.id.clone(),
                store_retailer: store.retailer,
                retailer: self.get_retailer_name(),
            });
        }

        Ok(())
    }

    async fn send_request(&self, request: Request) -> Result<String, RetailerError> {
        let session = self.sessions.get(self.get_retailer_name())?;
        let url = request.url().to_string();

        let response = session.make_web_request(request).await?;

        if !response.is_success() {
            error!(
                "{} responded with {} for {}",
                self.get_retailer_name(),
                response.status,
                url
            );

            return Err(RetailerError::UpstreamStatus {
                status: response.status.as_u16(),
                url,
            });
        }

        trace!("{}", response.body);

        Ok(response.body)
    }
}

#[async_trait]
impl Retailer for RetailerClient {
    fn get_retailer_name(&self) -> RetailerName {
        self.api.get_retailer_name()
    }

    async fn list_stores(&self) -> Result<Vec<Store>, RetailerError> {
        let request = self.api.build_store_list_request()?;
        let response = self.send_request(request).await?;

        let stores = self.api.parse_store_list(&response)?;
        info!("{} listed {} stores", self.get_retailer_name(), stores.len());

        Ok(stores)
    }

    async fn select_store(&self, store: &Store) -> Result<(), RetailerError> {
        self.check_store(store)?;

        let request = self.api.build_select_store_request(store)?;
        self.send_request(request).await?;

        info!("Selected {} store {} ({})", store.retailer, store.name, store.id);

        Ok(())
    }

    async fn search_products(
        &self,
        term: &str,
        store: &Store,
        page: u64,
    ) -> Result<SearchResult, RetailerError> {
        self.check_store(store)?;

        if page == 0 {
            return Err(RetailerError::InvalidPage(page));
        }

        let request = self.api.build_search_request(term, store, page)?;
        let response = self.send_request(request).await?;

        let mut result = self.api.parse_search_response(&response)?;

        if result.items.len() as u64 > ITEMS_PER_PAGE {
            warn!(
                "{} returned {} items for one page, keeping the first {}",
                self.get_retailer_name(),
                result.items.len(),
                ITEMS_PER_PAGE
            );
            result.items.truncate(ITEMS_PER_PAGE as usize);
        }

        debug!(
            "Search for {term:?} page {page} returned {} of {} items",
            result.items.len(),
            result.total_items
        );

        Ok(result)
    }
}
