use async_trait::async_trait;
use common::result::{
    base::{SearchResult, Store},
    enums::RetailerName,
};
use crawler::request::Request;

use crate::errors::RetailerError;

/// What every retailer can do, whatever its API looks like underneath.
///
/// Callers never branch on the retailer: anything retailer specific lives
/// behind this trait.
#[async_trait]
pub trait Retailer: Send + Sync {
    fn get_retailer_name(&self) -> RetailerName;

    /// Every store the retailer lists, tagged with this retailer
    async fn list_stores(&self) -> Result<Vec<Store>, RetailerError>;

    /// Binds later searches to `store`. Selecting the same store twice is fine.
    async fn select_store(&self, store: &Store) -> Result<(), RetailerError>;

    /// One page (1-indexed) of products matching `term` at `store`
    async fn search_products(
        &self,
        term: &str,
        store: &Store,
        page: u64,
    ) -> Result<SearchResult, RetailerError>;
}

/// The request shapes and response schemas of one retailer's HTTP API.
///
/// Implementations never send anything themselves; `RetailerClient` sends the
/// requests through the retailer's session and hands the bodies back.
pub trait RetailerApi: Send + Sync {
    fn get_retailer_name(&self) -> RetailerName;

    fn build_store_list_request(&self) -> Result<Request, RetailerError>;

    fn parse_store_list(&self, response: &str) -> Result<Vec<Store>, RetailerError>;

    fn build_select_store_request(&self, store: &Store) -> Result<Request, RetailerError>;

    fn build_search_request(
        &self,
        term: &str,
        store: &Store,
        page: u64,
    ) -> Result<Request, RetailerError>;

    fn parse_search_response(&self, response: &str) -> Result<SearchResult, RetailerError>;
}
