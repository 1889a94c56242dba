//! CLI command definitions using clap.
//!
//! - serve: run the stdio tool server (default)
//! - tools: print the tool catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// postbox-mcp - a small MCP tool server over stdio
#[derive(Parser, Debug)]
#[command(name = "postbox-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Serve tools over stdin/stdout
    Serve,

    /// Print the tool catalog as JSON and exit
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args means serve
        let cli = Cli::try_parse_from(["postbox-mcp"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["postbox-mcp", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["postbox-mcp", "--config", "/tmp/postbox.yml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/postbox.yml")));
    }

    #[test]
    fn test_cli_serve_command() {
        let cli = Cli::try_parse_from(["postbox-mcp", "serve", "-v"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_tools_command() {
        let cli = Cli::try_parse_from(["postbox-mcp", "-c", "x.yml", "tools"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Tools));
        assert_eq!(cli.config, Some(PathBuf::from("x.yml")));
    }

    #[test]
    fn test_cli_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["postbox-mcp", "daemon"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
