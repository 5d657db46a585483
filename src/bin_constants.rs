pub const APP_CONFIG_ENV_PREFIX: &str = "LOCALNOTES_";
pub const CONFIG_FILE_RELATIVE_PATH: &str = ".config/localnotes/config.toml";
pub const DATA_DIR_RELATIVE_PATH: &str = ".local/share/localnotes";

pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 400;

// the defaults are taken from the argon2 crate itself
pub const DEFAULT_ARGON2_M_COST: u32 = 19 * 1024;
pub const DEFAULT_ARGON2_T_COST: u32 = 2;
pub const DEFAULT_ARGON2_P_COST: u32 = 1;
pub const DEFAULT_ARGON2_OUTPUT_LEN: Option<usize> = Some(32);
