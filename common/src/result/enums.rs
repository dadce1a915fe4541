use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The grocery chains a store can belong to.
///
/// Pak'nSave and New World are both Foodstuffs banners and share one API
/// shape, but they are distinct retailers with distinct sessions.
#[derive(
    Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, EnumIter, ValueEnum,
)]
pub enum RetailerName {
    Countdown,
    PakNSave,
    NewWorld,
}

impl Display for RetailerName {
    fn fmt(&self, format: &mut Formatter) -> Result {
        let name = match self {
            RetailerName::Countdown => "Countdown",
            RetailerName::PakNSave => "Pak'nSave",
            RetailerName::NewWorld => "New World",
        };

        write!(format, "{name}")
    }
}
