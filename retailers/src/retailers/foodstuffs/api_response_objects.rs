use common::{deserialize_string_or_number::string_or_number, result::base::Product};
use serde::Deserialize;
use tracing::warn;

#[derive(Deserialize, Debug)]
pub(super) struct ApiStoreList {
    pub(super) stores: Vec<ApiStore>,
}

#[derive(Deserialize, Debug)]
pub(super) struct ApiStore {
    #[serde(deserialize_with = "string_or_number")]
    pub(super) id: String,
    pub(super) name: String,
    pub(super) address: String,
}

#[derive(Deserialize, Debug)]
pub(super) struct ApiSearchResponse {
    pub(super) data: ApiSearchData,
}

#[derive(Deserialize, Debug)]
pub(super) struct ApiSearchData {
    pub(super) products: Vec<ApiProduct>,
    pub(super) total: u64,
}

#[derive(Deserialize, Debug)]
pub(super) struct ApiProduct {
    pub(super) name: String,
    /// Already in cents
    pub(super) price: Option<u64>,
}

impl ApiProduct {
    pub(super) fn into_product(self) -> Option<Product> {
        let Some(price) = self.price else {
            warn!("Skipping unpriced item: {}", self.name);
            return None;
        };

        Some(Product::new(self.name, price))
    }
}
