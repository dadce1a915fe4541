use common::{
    deserialize_string_or_number::string_or_number,
    result::{base::Product, enums::RetailerName},
};
use serde::Deserialize;
use serde_json::Number;
use tracing::warn;

use crate::{errors::RetailerError, utils::conversions::dollars_to_cents};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiPickupAddresses {
    pub(super) store_areas: Vec<ApiStoreArea>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiStoreArea {
    pub(super) store_addresses: Vec<ApiStoreAddress>,
}

#[derive(Deserialize, Debug)]
pub(super) struct ApiStoreAddress {
    #[serde(deserialize_with = "string_or_number")]
    pub(super) id: String,
    pub(super) name: String,
    pub(super) address: String,
}

#[derive(Deserialize, Debug)]
pub(super) struct ApiSearchResponse {
    pub(super) products: ApiProducts,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiProducts {
    pub(super) items: Vec<ApiProduct>,
    pub(super) total_items: u64,
}

// the item list mixes products with promotional tiles that carry no price
#[derive(Deserialize, Debug)]
pub(super) struct ApiProduct {
    pub(super) name: Option<String>,
    pub(super) price: Option<ApiProductPrice>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct ApiProductPrice {
    /// Whole dollars, e.g. `5.99`
    pub(super) sale_price: Option<Number>,
}

impl ApiProduct {
    pub(super) fn into_product(self) -> Result<Option<Product>, RetailerError> {
        let sale_price = self.price.and_then(|price| price.sale_price);

        let (Some(name), Some(sale_price)) = (self.name, sale_price) else {
            warn!("Skipping {} item without a name or price", RetailerName::Countdown);
            return Ok(None);
        };

        Ok(Some(Product::new(name, dollars_to_cents(&sale_price)?)))
    }
}
