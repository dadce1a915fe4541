use common::{
    result::{
        base::{SearchResult, Store},
        enums::RetailerName,
    },
    utils::ITEMS_PER_PAGE,
};
use crawler::{
    request::{Request, RequestBuilder},
    traits::HttpMethod,
};
use tracing::debug;

use crate::{
    errors::RetailerError,
    retailers::foodstuffs::api_response_objects::{ApiSearchResponse, ApiStoreList},
    structures::RetailerApi,
    utils::headers::browser_headers,
};

const STORE_LIST_URL: &str = "{base}/CommonApi/Store/GetStoreList";
const SELECT_STORE_URL: &str = "{base}/CommonApi/Store/ChangeStore?storeId={store_id}&clickSource=list";
const SEARCH_URL: &str = "{base}/next/api/products/search?q={term}&s=popularity&pg={page}&storeId={store_id}&publish=true&ps={page_size}";

/// The API shared by the Foodstuffs banners (Pak'nSave and New World).
///
/// Store changes are posted to the banner's CommonApi, searches name the
/// store explicitly, and prices come back in cents.
pub struct Foodstuffs {
    retailer: RetailerName,
    base_url: String,
}

impl Foodstuffs {
    pub fn new(retailer: RetailerName, base_url: impl Into<String>) -> Self {
        Self {
            retailer,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn pak_n_save(base_url: impl Into<String>) -> Self {
        Self::new(RetailerName::PakNSave, base_url)
    }

    pub fn new_world(base_url: impl Into<String>) -> Self {
        Self::new(RetailerName::NewWorld, base_url)
    }

    fn headers(&self) -> Vec<(String, String)> {
        browser_headers(&[
            ("referer", self.base_url.as_str()),
            ("referrer-policy", "no-referrer-when-downgrade"),
        ])
    }
}

impl RetailerApi for Foodstuffs {
    fn get_retailer_name(&self) -> RetailerName {
        self.retailer
    }

    fn build_store_list_request(&self) -> Result<Request, RetailerError> {
        let request = RequestBuilder::new()
            .set_method(HttpMethod::POST)
            .set_url(STORE_LIST_URL.replace("{base}", &self.base_url))
            .set_headers(&self.headers())
            .build();

        Ok(request)
    }

    fn parse_store_list(&self, response: &str) -> Result<Vec<Store>, RetailerError> {
        let response_objects = serde_json::from_str::<ApiStoreList>(response)?;

        let stores = response_objects
            .stores
            .into_iter()
            .map(|store| Store::new(store.id, store.name, store.address, self.retailer))
            .collect();

        Ok(stores)
    }

    fn build_select_store_request(&self, store: &Store) -> Result<Request, RetailerError> {
        let url = SELECT_STORE_URL
            .replace("{base}", &self.base_url)
            .replace("{store_id}", &urlencoding::encode(&store.id));

        let request = RequestBuilder::new()
            .set_method(HttpMethod::POST)
            .set_url(url)
            .set_headers(&self.headers())
            .build();

        Ok(request)
    }

    fn build_search_request(
        &self,
        term: &str,
        store: &Store,
        page: u64,
    ) -> Result<Request, RetailerError> {
        let url = SEARCH_URL
            .replace("{base}", &self.base_url)
            .replace("{term}", &urlencoding::encode(term))
            .replace("{page}", &page.to_string())
            .replace("{store_id}", &urlencoding::encode(&store.id))
            .replace("{page_size}", &ITEMS_PER_PAGE.to_string());

        debug!("Setting page to {}", url);

        let request = RequestBuilder::new()
            .set_url(url)
            .set_headers(&self.headers())
            .build();

        Ok(request)
    }

    fn parse_search_response(&self, response: &str) -> Result<SearchResult, RetailerError> {
        let response_objects = serde_json::from_str::<ApiSearchResponse>(response)?;
        let data = response_objects.data;

        let items = data
            .products
            .into_iter()
            .filter_map(|product| product.into_product())
            .collect();

        Ok(SearchResult::new(items, data.total))
    }
}
