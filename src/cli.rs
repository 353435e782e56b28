use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::{AppConfig, ConfigOverrides};
use commands::{report, serve};

#[derive(Parser)]
#[command(name = "crmpro")]
#[command(about = "CRM Pro dashboard server and reporting tools")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file, without extension
    ///
    /// Missing files are ignored; `CRMPRO_*` environment variables still apply.
    #[arg(short, long, global = true, default_value = "crmpro")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled frontend bundle and the health endpoint
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory holding the built frontend (index.html and the wasm bundle)
        #[arg(short, long)]
        frontend_dist: Option<String>,
    },
    /// Print sales metrics and customer search results for the seed data
    ///
    /// Examples:
    ///   crmpro report
    ///   crmpro report --search acme --status completed
    Report {
        /// Case-insensitive text matched against customer name and email
        #[arg(short, long, default_value = "")]
        search: String,

        /// Order status filter: all, completed, pending or cancelled
        #[arg(long, default_value = "all")]
        status: String,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, frontend_dist } => {
                let overrides = ConfigOverrides { bind_address, frontend_dist };
                let config = AppConfig::load(&self.config, overrides)?;
                serve(config).await?;
            }
            Commands::Report { search, status, json } => {
                report(&search, &status, json)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::parse_from(["crmpro", "serve", "--bind-address", "127.0.0.1:8080"]);
        match cli.command {
            Commands::Serve { bind_address, frontend_dist } => {
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:8080"));
                assert!(frontend_dist.is_none());
            }
            _ => panic!("expected serve command"),
        }
        assert_eq!(cli.config, "crmpro");
    }

    #[test]
    fn test_parse_report_defaults() {
        let cli = Cli::parse_from(["crmpro", "report"]);
        match cli.command {
            Commands::Report { search, status, json } => {
                assert_eq!(search, "");
                assert_eq!(status, "all");
                assert!(!json);
            }
            _ => panic!("expected report command"),
        }
    }
}
