mod args;
mod errors;
mod prompt;
mod render;
mod shopper;

use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use retailers::registry::RetailerRegistry;
use tracing::{debug, error};
use utils::logger::configure_logger;

use crate::{args::Args, errors::ShopperError, prompt::StdinPrompter, shopper::Shopper};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    configure_logger(args.log_level);

    debug!("{args:?}");

    let registry = Arc::new(RetailerRegistry::from_config(&args.retailer_config()));

    let mut shopper = Shopper::new(
        registry,
        StdinPrompter::new(),
        std::io::stdout(),
        args.max_attempts,
        args.retailers,
    );

    match shopper.run().await {
        Ok(()) | Err(ShopperError::InputClosed) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
