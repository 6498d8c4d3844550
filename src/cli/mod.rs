//! CLI module for the user directory

pub mod serve;

use clap::{Parser, Subcommand};

/// User Directory - manage user records through HTML forms
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["user-directory", "serve", "--port", "9000"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9000));
        assert!(args.host.is_none());
        assert!(!args.seed);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["user-directory"]).is_err());
    }
}
