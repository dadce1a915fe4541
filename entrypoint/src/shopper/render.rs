use common::result::base::Store;
use retailers::search_session::SearchPage;

const NAME_HEADER: &str = "Product Name";
const PRICE_HEADER: &str = "Price";

pub(crate) fn render_store_choices(stores: &[Store]) -> String {
    stores
        .iter()
        .enumerate()
        .map(|(index, store)| {
            format!(
                "{}. {} - {} ({})\n",
                index + 1,
                store.name,
                store.address,
                store.retailer
            )
        })
        .collect()
}

/// Products of one page as a plain-text table, numbered from 1
pub(crate) fn render_products(page: &SearchPage) -> String {
    let rows: Vec<(String, &str, String)> = page
        .result
        .items
        .iter()
        .enumerate()
        .map(|(index, product)| {
            (
                (index + 1).to_string(),
                product.name.as_str(),
                product.display_price(),
            )
        })
        .collect();

    let index_width = rows.iter().map(|row| row.0.len()).max().unwrap_or(0).max(1);
    let name_width = rows
        .iter()
        .map(|row| row.1.chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME_HEADER.len());
    let price_width = rows
        .iter()
        .map(|row| row.2.len())
        .max()
        .unwrap_or(0)
        .max(PRICE_HEADER.len());

    let mut table = format!(
        "{:>index_width$} | {:<name_width$} | {:>price_width$}\n",
        "#", NAME_HEADER, PRICE_HEADER
    );
    table.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(index_width),
        "-".repeat(name_width),
        "-".repeat(price_width)
    ));

    for (index, name, price) in rows {
        table.push_str(&format!(
            "{index:>index_width$} | {name:<name_width$} | {price:>price_width$}\n"
        ));
    }

    table
}

pub(crate) fn next_action_prompt(page: &SearchPage) -> String {
    let mut prompt = format!("Currently on page {}/{}. ", page.page, page.total_pages);

    if page.has_next_page() {
        prompt.push_str("Enter (n)ext page, ");
    }

    if page.has_previous_page() {
        prompt.push_str("(p)revious page, ");
    }

    prompt.push_str("or a new search term: ");

    prompt
}
