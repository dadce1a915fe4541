pub mod client;
pub mod config;
pub mod errors;
pub mod registry;
pub mod retailers;
pub mod search_session;
pub mod session_store;
pub mod structures;
pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod testing;
