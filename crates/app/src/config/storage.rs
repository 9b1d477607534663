//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Where persistent state is kept.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the cart, orders and remembered user
    #[arg(
        long,
        env = "KEEPSTUDY_DATA_DIR",
        default_value = ".keepstudy",
        global = true
    )]
    pub data_dir: PathBuf,
}
