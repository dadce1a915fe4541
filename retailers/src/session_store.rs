use std::{
    collections::{HashMap, hash_map::Entry},
    sync::{Arc, Mutex, PoisonError},
};

use common::result::enums::RetailerName;
use crawler::session::Session;
use tracing::debug;

use crate::errors::RetailerError;

/// Cookie-bearing sessions, one per retailer, created on first use and kept
/// for the lifetime of the process.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<RetailerName, Arc<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, retailer: RetailerName) -> Result<Arc<Session>, RetailerError> {
        // the map only ever gains complete entries, so a poisoned lock is still usable
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);

        let session = match sessions.entry(retailer) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                debug!("Creating session for {retailer}");
                entry.insert(Arc::new(Session::new()?)).clone()
            }
        };

        Ok(session)
    }
}
