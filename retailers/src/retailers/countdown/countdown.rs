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
use serde_json::json;
use tracing::debug;

use crate::{
    errors::RetailerError,
    retailers::countdown::api_response_objects::{ApiPickupAddresses, ApiSearchResponse},
    structures::RetailerApi,
    utils::{conversions::string_to_u64, headers::browser_headers},
};

const STORE_LIST_URL: &str = "{base}/api/v1/addresses/pickup-addresses";
const SELECT_STORE_URL: &str = "{base}/api/v1/fulfilment/my/pickup-addresses";
const SEARCH_URL: &str = "{base}/api/v1/products?target=search&search={term}&page={page}&inStockProductsOnly=false&size={page_size}";

const COUNTDOWN_HEADERS: [(&str, &str); 6] = [
    ("cache-control", "no-cache"),
    ("content-type", "application/json"),
    ("expires", "Sat, 01 Jan 2000 00:00:00 GMT"),
    ("pragma", "no-cache"),
    ("x-requested-with", "OnlineShopping.WebApp"),
    ("x-ui-ver", "7.21.138"),
];

/// Countdown keeps the selected pickup store in the session cookie, and
/// reports prices in whole dollars.
pub struct Countdown {
    base_url: String,
}

impl Countdown {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn headers() -> Vec<(String, String)> {
        browser_headers(&COUNTDOWN_HEADERS)
    }
}

impl RetailerApi for Countdown {
    fn get_retailer_name(&self) -> RetailerName {
        RetailerName::Countdown
    }

    fn build_store_list_request(&self) -> Result<Request, RetailerError> {
        let request = RequestBuilder::new()
            .set_url(STORE_LIST_URL.replace("{base}", &self.base_url))
            .set_headers(&Self::headers())
            .build();

        Ok(request)
    }

    fn parse_store_list(&self, response: &str) -> Result<Vec<Store>, RetailerError> {
        let response_objects = serde_json::from_str::<ApiPickupAddresses>(response)?;

        let Some(store_area) = response_objects.store_areas.into_iter().next() else {
            return Err(RetailerError::ApiResponseMissingKey(
                "storeAreas is empty".into(),
            ));
        };

        let stores = store_area
            .store_addresses
            .into_iter()
            .map(|address| {
                Store::new(
                    address.id,
                    address.name,
                    address.address,
                    self.get_retailer_name(),
                )
            })
            .collect();

        Ok(stores)
    }

    fn build_select_store_request(&self, store: &Store) -> Result<Request, RetailerError> {
        let address_id = string_to_u64(store.id.clone())?;

        let request = RequestBuilder::new()
            .set_method(HttpMethod::PUT)
            .set_url(SELECT_STORE_URL.replace("{base}", &self.base_url))
            .set_headers(&Self::headers())
            .set_json_body(json!({ "addressId": address_id }))
            .build();

        Ok(request)
    }

    fn build_search_request(
        &self,
        term: &str,
        _store: &Store,
        page: u64,
    ) -> Result<Request, RetailerError> {
        // the store is carried by the session cookie, not the query
        let url = SEARCH_URL
            .replace("{base}", &self.base_url)
            .replace("{term}", &urlencoding::encode(term))
            .replace("{page}", &page.to_string())
            .replace("{page_size}", &ITEMS_PER_PAGE.to_string());

        debug!("Setting page to {}", url);

        let request = RequestBuilder::new()
            .set_url(url)
            .set_headers(&Self::headers())
            .build();

        Ok(request)
    }

    fn parse_search_response(&self, response: &str) -> Result<SearchResult, RetailerError> {
        let response_objects = serde_json::from_str::<ApiSearchResponse>(response)?;
        let products = response_objects.products;

        let mut items = Vec::new();
        for item in products.items {
            if let Some(product) = item.into_product()? {
                items.push(product);
            }
        }

        Ok(SearchResult::new(items, products.total_items))
    }
}
