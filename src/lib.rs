pub mod bin_constants;
pub mod cli;
pub mod config;
pub mod data;
pub mod hasher;
mod lib_constants;
pub mod logging;
pub mod rng;
pub mod serde;
pub mod store;
pub mod util;
