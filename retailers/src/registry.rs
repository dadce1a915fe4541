use std::sync::Arc;

use common::result::{base::Store, enums::RetailerName};
use futures::future::try_join_all;
use strum::IntoEnumIterator;
use tracing::{error, info};

use crate::{
    client::RetailerClient,
    config::RetailerConfig,
    errors::RetailerError,
    retailers::{countdown::countdown::Countdown, foodstuffs::foodstuffs::Foodstuffs},
    session_store::SessionStore,
    structures::Retailer,
};

/// One adapter per retailer, looked up by name.
///
/// The registry holds exactly one adapter for each `RetailerName`, so lookup
/// cannot fail.
pub struct RetailerRegistry {
    countdown: Box<dyn Retailer>,
    pak_n_save: Box<dyn Retailer>,
    new_world: Box<dyn Retailer>,
}

impl RetailerRegistry {
    pub fn new(
        countdown: Box<dyn Retailer>,
        pak_n_save: Box<dyn Retailer>,
        new_world: Box<dyn Retailer>,
    ) -> Self {
        Self {
            countdown,
            pak_n_save,
            new_world,
        }
    }

    /// The live adapters, each talking over its own session
    pub fn from_config(config: &RetailerConfig) -> Self {
        let sessions = Arc::new(SessionStore::new());

        let countdown = Countdown::new(config.base_url(RetailerName::Countdown));
        let pak_n_save = Foodstuffs::pak_n_save(config.base_url(RetailerName::PakNSave));
        let new_world = Foodstuffs::new_world(config.base_url(RetailerName::NewWorld));

        Self::new(
            Box::new(RetailerClient::new(Box::new(countdown), sessions.clone())),
            Box::new(RetailerClient::new(Box::new(pak_n_save), sessions.clone())),
            Box::new(RetailerClient::new(Box::new(new_world), sessions)),
        )
    }

    pub fn for_retailer(&self, retailer: RetailerName) -> &dyn Retailer {
        match retailer {
            RetailerName::Countdown => self.countdown.as_ref(),
            RetailerName::PakNSave => self.pak_n_save.as_ref(),
            RetailerName::NewWorld => self.new_world.as_ref(),
        }
    }

    /// Stores of every retailer, concatenated in `RetailerName` order.
    ///
    /// Fails as a whole as soon as any retailer fails.
    pub async fn list_all_stores(&self) -> Result<Vec<Store>, RetailerError> {
        self.list_stores_for(&[]).await
    }

    /// Same as `list_all_stores`, limited to `retailers` (all of them when empty)
    pub async fn list_stores_for(
        &self,
        retailers: &[RetailerName],
    ) -> Result<Vec<Store>, RetailerError> {
        let selected: Vec<RetailerName> = RetailerName::iter()
            .filter(|retailer| retailers.is_empty() || retailers.contains(retailer))
            .collect();

        let listings = try_join_all(selected.iter().map(|retailer| async move {
            self.for_retailer(*retailer)
                .list_stores()
                .await
                .inspect_err(|err| error!("Failed to list {retailer} stores: {err}"))
        }))
        .await?;

        let stores: Vec<Store> = listings.into_iter().flatten().collect();
        info!("Listed {} stores across {} retailers", stores.len(), selected.len());

        Ok(stores)
    }
}
