// CLI module for serving the API and managing the database schema

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::{self, BootstrapSettings};

/// Checkouts backend CLI
#[derive(Parser, Debug)]
#[command(name = "checkouts")]
#[command(about = "People and item checkout tracking service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Apply pending migrations and start the HTTP server (default)
    Serve,

    /// Apply pending migrations and exit
    Migrate,

    /// Drop every table and re-create the schema
    Reset {
        /// Confirm that all people and items will be deleted
        #[arg(long)]
        yes: bool,
    },
}

/// Execute CLI command
///
/// Opens the database named by the bootstrap settings and routes the parsed
/// command to its handler. No command means `serve`.
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = config::init_database(settings).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::serve(db, settings).await?,
        Commands::Migrate => migrate::run_migrations(&db).await?,
        Commands::Reset { yes } => migrate::reset(&db, yes).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["checkouts"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_reset_requires_flag_to_confirm() {
        let cli = Cli::try_parse_from(["checkouts", "reset"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Reset { yes: false }));

        let cli = Cli::try_parse_from(["checkouts", "reset", "--yes"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Reset { yes: true }));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["checkouts", "bootstrap"]).is_err());
    }
}
