/// Page size used by every retailer so page arithmetic is shared
pub const ITEMS_PER_PAGE: u64 = 60;

/// Number of pages needed to show `total_items`, never less than one
pub fn total_pages(total_items: u64) -> u64 {
    total_items.div_ceil(ITEMS_PER_PAGE).max(1)
}

pub fn format_price(price_minor_units: u64) -> String {
    format!("${}.{:02}", price_minor_units / 100, price_minor_units % 100)
}
