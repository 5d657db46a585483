use std::path::PathBuf;
use std::time::Duration;

use crate::config::app_config::data::AppConfigData;
use crate::config::hasher_config::ProductionHasherConfigData;

pub mod data;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub simulated_latency: Duration,
    pub hasher_config: ProductionHasherConfigData,
}

impl From<AppConfigData> for AppConfig {
    fn from(value: AppConfigData) -> Self {
        AppConfig {
            data_directory: value.data_directory,
            simulated_latency: Duration::from_millis(value.simulated_latency_ms),
            hasher_config: value.hasher,
        }
    }
}
