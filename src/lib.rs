pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, MenuCommand};

pub use config::MenuConfig;
pub use crate::core::thali::{aggregate_stats, describe, generate_receipt, search};
pub use crate::core::{MenuProvider, ThaliRecord, ThaliStats};
pub use utils::error::{KitError, Result};
