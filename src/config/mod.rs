pub mod toml_config;

pub use toml_config::{MenuConfig, ReceiptConfig};

#[cfg(feature = "cli")]
mod cli_args {
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
    use clap::{Parser, Subcommand};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "thali-kit")]
    #[command(about = "Describe, summarise, search and bill a thali menu")]
    pub struct CliConfig {
        /// Menu file (.toml or .json)
        #[arg(short, long, default_value = "menu.toml")]
        pub menu: String,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: MenuCommand,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
    pub enum MenuCommand {
        /// Print the one-line description of each thali
        Describe {
            /// Only describe the thali with this exact name
            #[arg(long)]
            name: Option<String>,
        },
        /// Print counts, price range and average as JSON
        Stats,
        /// Print thalis whose name or items contain the query
        Search { query: String },
        /// Print a receipt for the whole menu
        Receipt {
            /// Overrides `[receipt] customer` from the menu file
            #[arg(long)]
            customer: Option<String>,
        },
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("menu", &self.menu)?;
            if let MenuCommand::Receipt {
                customer: Some(customer),
            } = &self.command
            {
                validate_non_empty_string("customer", customer)?;
            }
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
pub use cli_args::{CliConfig, MenuCommand};
