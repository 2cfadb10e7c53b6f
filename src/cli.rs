//! Command-line definition: global options plus one subcommand per API
//! operation.

use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;

use crate::api::{ClientConfig, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(name = "chuck-cli")]
#[command(about = "A command-line tool to fetch and search Chuck Norris jokes")]
#[command(version)]
pub struct Cli {
    /// Base URL of the jokes service
    #[arg(long = "base-url", global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 5)]
    pub timeout: u64,

    /// When to colorize output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Ignore HTTP(S)_PROXY and friends
    #[arg(long = "no-proxy", global = true)]
    pub no_proxy: bool,

    /// Print the ASCII-art banner before the output
    #[arg(long, global = true)]
    pub banner: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Get a random Chuck Norris joke
    Random {
        /// Optional category to fetch a joke from (e.g. "dev")
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List all available joke categories
    Categories,
    /// Search for jokes by keyword
    Search {
        /// The keyword to search for in jokes
        query: String,
    },
    /// Browse jokes from an interactive menu
    Interactive,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            use_system_proxy: !self.no_proxy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_random_with_category() {
        let cli = Cli::parse_from(["chuck-cli", "random", "--category", "dev"]);
        assert_eq!(
            cli.command,
            Commands::Random {
                category: Some("dev".into())
            }
        );

        let cli = Cli::parse_from(["chuck-cli", "random", "-c", "food"]);
        assert_eq!(
            cli.command,
            Commands::Random {
                category: Some("food".into())
            }
        );
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["chuck-cli", "categories"]);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.client_config().timeout, Duration::from_secs(5));
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.banner);
        assert!(cli.client_config().use_system_proxy);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from([
            "chuck-cli",
            "search",
            "kick",
            "--timeout",
            "2",
            "--color",
            "never",
            "-v",
        ]);
        assert_eq!(cli.command, Commands::Search { query: "kick".into() });
        assert_eq!(cli.timeout, 2);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.verbose);
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["chuck-cli", "search"]).is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["chuck-cli"]).is_err());
        assert!(Cli::try_parse_from(["chuck-cli", "dance"]).is_err());
    }
}
