use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexis_config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "lexis",
    version,
    about = "Import dictionary definitions into a content store"
)]
pub struct Cli {
    /// JSON content store to use instead of LEXIS_STORE_PATH
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Dictionary entries endpoint to use instead of DICTIONARY_API_URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Set up the Dictionary Entry content type and fields
    #[command(visible_alias = "dict-setup")]
    Setup,

    /// Import a word from the external dictionary API
    #[command(visible_alias = "dict-import")]
    Import {
        /// The word to import
        word: String,
    },
}

impl Cli {
    /// Let command line options override the environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.store {
            config.store.path = path.clone();
        }

        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
    }
}
