use std::path::PathBuf;

use crate::bin_constants::CONFIG_FILE_RELATIVE_PATH;
use crate::util::home_dir;

pub mod app_config;
pub mod figment;
pub mod hasher_config;

pub use app_config::AppConfig;
pub use hasher_config::ProductionHasherConfigData;

pub fn default_config_file() -> PathBuf {
    home_dir().join(CONFIG_FILE_RELATIVE_PATH)
}
