use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "crowdfund", bin_name = "crowdfund", version)]
#[command(about = "Register, log in and manage crowdfunding projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// List all projects
    #[command(alias = "ls")]
    List,

    /// Find projects by start or end date
    Search {
        /// Start date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "end", required_unless_present = "end")]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Write the current settings to <home>/config.json
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["crowdfund"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn data_file_is_global() {
        let cli = Cli::try_parse_from(["crowdfund", "list", "--data-file", "x.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.data_file, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn config_init_flag() {
        let cli = Cli::try_parse_from(["crowdfund", "config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { init: false })));

        let cli = Cli::try_parse_from(["crowdfund", "config", "--init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { init: true })));
    }

    #[test]
    fn search_needs_exactly_one_date() {
        assert!(Cli::try_parse_from(["crowdfund", "search"]).is_err());
        assert!(Cli::try_parse_from([
            "crowdfund",
            "search",
            "--start",
            "2025-01-01",
            "--end",
            "2025-02-01"
        ])
        .is_err());

        let cli = Cli::try_parse_from(["crowdfund", "search", "--end", "2025-02-01"]).unwrap();
        match cli.command {
            Some(Commands::Search { start, end }) => {
                assert_eq!(start, None);
                assert_eq!(end.as_deref(), Some("2025-02-01"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
