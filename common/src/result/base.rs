use crate::{result::enums::RetailerName, utils::format_price};

/// A physical store, as listed by its retailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub retailer: RetailerName,
}

impl Store {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        retailer: RetailerName,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            retailer,
        }
    }

    /// Case-insensitive substring match against the store name or address
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        self.name.to_lowercase().contains(&query) || self.address.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    /// Always in cents, whatever unit the retailer reports in
    pub price_minor_units: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, price_minor_units: u64) -> Self {
        Self {
            name: name.into(),
            price_minor_units,
        }
    }

    pub fn display_price(&self) -> String {
        format_price(self.price_minor_units)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub items: Vec<Product>,
    pub total_items: u64,
}

impl SearchResult {
    pub fn new(items: Vec<Product>, total_items: u64) -> Self {
        Self { items, total_items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
