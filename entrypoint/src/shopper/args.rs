use clap::Parser;
use common::result::enums::RetailerName;
use retailers::config::{
    COUNTDOWN_BASE_URL, NEW_WORLD_BASE_URL, PAK_N_SAVE_BASE_URL, RetailerConfig,
};
use tracing::level_filters::LevelFilter;

/// Pick a supermarket, then search and page through its products
#[derive(Parser, Debug)]
#[command(name = "shopper", version)]
pub(crate) struct Args {
    /// Only list stores of this retailer (repeatable, all retailers by default)
    #[arg(short, long = "retailer", value_enum)]
    pub(crate) retailers: Vec<RetailerName>,

    /// Invalid answers allowed per question before giving up
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) max_attempts: u32,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value_t = LevelFilter::WARN)]
    pub(crate) log_level: LevelFilter,

    #[arg(long, default_value = COUNTDOWN_BASE_URL)]
    pub(crate) countdown_url: String,

    #[arg(long, default_value = PAK_N_SAVE_BASE_URL)]
    pub(crate) paknsave_url: String,

    #[arg(long, default_value = NEW_WORLD_BASE_URL)]
    pub(crate) newworld_url: String,
}

impl Args {
    pub(crate) fn retailer_config(&self) -> RetailerConfig {
        RetailerConfig {
            countdown_url: self.countdown_url.clone(),
            pak_n_save_url: self.paknsave_url.clone(),
            new_world_url: self.newworld_url.clone(),
        }
    }
}
