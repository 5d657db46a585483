use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bin_constants::{DATA_DIR_RELATIVE_PATH, DEFAULT_SIMULATED_LATENCY_MS};
use crate::config::hasher_config::ProductionHasherConfigData;
use crate::util::home_dir;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfigData {
    pub data_directory: PathBuf,
    pub simulated_latency_ms: u64,
    pub hasher: ProductionHasherConfigData,
}

impl Default for AppConfigData {
    fn default() -> Self {
        AppConfigData {
            data_directory: home_dir().join(DATA_DIR_RELATIVE_PATH),
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            hasher: ProductionHasherConfigData::default(),
        }
    }
}
