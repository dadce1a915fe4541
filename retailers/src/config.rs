use common::result::enums::RetailerName;

pub const COUNTDOWN_BASE_URL: &str = "https://www.countdown.co.nz";
pub const PAK_N_SAVE_BASE_URL: &str = "https://www.paknsave.co.nz";
pub const NEW_WORLD_BASE_URL: &str = "https://www.newworld.co.nz";

/// Where each retailer's API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetailerConfig {
    pub countdown_url: String,
    pub pak_n_save_url: String,
    pub new_world_url: String,
}

impl Default for RetailerConfig {
    fn default() -> Self {
        Self {
            countdown_url: COUNTDOWN_BASE_URL.into(),
            pak_n_save_url: PAK_N_SAVE_BASE_URL.into(),
            new_world_url: NEW_WORLD_BASE_URL.into(),
        }
    }
}

impl RetailerConfig {
    pub fn base_url(&self, retailer: RetailerName) -> &str {
        let url = match retailer {
            RetailerName::Countdown => &self.countdown_url,
            RetailerName::PakNSave => &self.pak_n_save_url,
            RetailerName::NewWorld => &self.new_world_url,
        };

        url.trim_end_matches('/')
    }
}
