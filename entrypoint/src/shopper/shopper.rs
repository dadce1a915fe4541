use std::{io::Write, sync::Arc};

use common::result::{base::Store, enums::RetailerName};
use retailers::{
    errors::SessionError,
    registry::RetailerRegistry,
    search_session::{SearchOutcome, SearchSession},
};
use tracing::{info, warn};

use crate::{
    errors::ShopperError,
    prompt::Prompter,
    render::{next_action_prompt, render_products, render_store_choices},
};

const STORE_FILTER_QUESTION: &str = "Enter a search term for a supermarket: ";
const STORE_NUMBER_QUESTION: &str = "Please select a supermarket by entering its number: ";
const PRODUCT_QUESTION: &str = "Enter a search term for food: ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Search(String),
    Next,
    Previous,
}

/// The interactive loop: pick a store, then search and page until input runs out
pub(crate) struct Shopper<P, W> {
    registry: Arc<RetailerRegistry>,
    session: SearchSession,
    prompter: P,
    out: W,
    max_attempts: u32,
    retailers: Vec<RetailerName>,
}

impl<P: Prompter, W: Write> Shopper<P, W> {
    pub(crate) fn new(
        registry: Arc<RetailerRegistry>,
        prompter: P,
        out: W,
        max_attempts: u32,
        retailers: Vec<RetailerName>,
    ) -> Self {
        Self {
            session: SearchSession::new(registry.clone()),
            registry,
            prompter,
            out,
            max_attempts,
            retailers,
        }
    }

    pub(crate) async fn run(&mut self) -> Result<(), ShopperError> {
        let stores = self.registry.list_stores_for(&self.retailers).await?;

        if stores.is_empty() {
            writeln!(self.out, "No supermarkets found.")?;
            return Ok(());
        }

        let filtered = self.prompt_for_store_filter(&stores).await?;
        let store = self.prompt_for_store(&filtered).await?;

        info!("Selecting {} ({})", store.name, store.retailer);
        self.session.select_store(store).await?;

        let mut action = Action::Search(self.prompt_for_product().await?);

        loop {
            let outcome = match &action {
                Action::Search(term) => self.session.new_search(term).await,
                Action::Next => self.session.next_page().await,
                Action::Previous => self.session.previous_page().await,
            };

            action = match outcome {
                Ok(SearchOutcome::Found { .. }) => {
                    self.show_current_page()?;
                    self.prompt_for_next_action().await?
                }
                Ok(SearchOutcome::NoMatches) => {
                    writeln!(self.out, "No products found for that search term. Try again.")?;
                    Action::Search(self.prompt_for_product().await?)
                }
                Err(SessionError::Upstream(err)) => {
                    warn!("Search failed: {err}");
                    writeln!(self.out, "Search failed ({err}). Try again.")?;
                    Action::Search(self.prompt_for_product().await?)
                }
                Err(err) => return Err(err.into()),
            };
        }
    }

    fn show_current_page(&mut self) -> Result<(), ShopperError> {
        let Some(page) = self.session.current_page() else {
            return Ok(());
        };

        writeln!(self.out, "\nHere are the products found:")?;
        write!(self.out, "{}", render_products(page))?;

        Ok(())
    }

    /// Asks `question` until `parse` accepts the trimmed answer, at most
    /// `max_attempts` times
    async fn ask_until<T>(
        &mut self,
        question: &str,
        invalid_message: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ShopperError> {
        for _ in 0..self.max_attempts {
            let answer = self.prompter.ask(question).await?;

            if let Some(parsed) = parse(answer.trim()) {
                return Ok(parsed);
            }

            writeln!(self.out, "{invalid_message}")?;
        }

        Err(ShopperError::TooManyAttempts(self.max_attempts))
    }

    async fn prompt_for_store_filter(&mut self, stores: &[Store]) -> Result<Vec<Store>, ShopperError> {
        self.ask_until(
            STORE_FILTER_QUESTION,
            "No supermarkets found for that search term. Try again.",
            |query| {
                let matches: Vec<Store> = stores
                    .iter()
                    .filter(|store| store.matches(query))
                    .cloned()
                    .collect();

                (!matches.is_empty()).then_some(matches)
            },
        )
        .await
    }

    async fn prompt_for_store(&mut self, stores: &[Store]) -> Result<Store, ShopperError> {
        write!(self.out, "{}", render_store_choices(stores))?;

        self.ask_until(STORE_NUMBER_QUESTION, "Invalid selection. Try again.", |answer| {
            let number = answer.parse::<usize>().ok()?;

            stores.get(number.checked_sub(1)?).cloned()
        })
        .await
    }

    async fn prompt_for_product(&mut self) -> Result<String, ShopperError> {
        self.ask_until(PRODUCT_QUESTION, "Please enter a search term.", |answer| {
            (!answer.is_empty()).then(|| answer.to_string())
        })
        .await
    }

    async fn prompt_for_next_action(&mut self) -> Result<Action, ShopperError> {
        let Some((question, has_next, has_previous)) = self.session.current_page().map(|page| {
            (
                next_action_prompt(page),
                page.has_next_page(),
                page.has_previous_page(),
            )
        }) else {
            return Ok(Action::Search(self.prompt_for_product().await?));
        };

        self.ask_until(&question, "Invalid choice. Please try again.", |answer| {
            match answer.to_lowercase().as_str() {
                "n" if has_next => Some(Action::Next),
                "p" if has_previous => Some(Action::Previous),
                "n" | "p" | "" => None,
                _ => Some(Action::Search(answer.to_string())),
            }
        })
        .await
    }
}
