//! Command-line interface for LongView
//!
//! Thin wrapper over [`ConfigManager`] for validating, inspecting, and
//! rewriting dashboard documents from the shell.

use crate::config::{serializer, ConfigManager};
use crate::models::{Configuration, Item, ItemType};
use crate::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// LongView command-line interface
#[derive(Parser)]
#[command(name = "longview")]
#[command(about = "Dashboard configuration tool for LongView")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct LongViewCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file and print a summary
    Check {
        /// Configuration file path
        path: PathBuf,
    },

    /// Print the parsed configuration in canonical form
    Show {
        /// Configuration file path
        path: PathBuf,

        /// Emit JSON instead of YAML for machine-readable output
        #[arg(long)]
        json: bool,
    },

    /// Parse a configuration file and re-serialize it canonically
    Fmt {
        /// Configuration file path
        path: PathBuf,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a starter configuration file
    Init {
        /// Target path (defaults to ~/.config/longview/longview.yaml)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

pub fn run(cli: LongViewCli) -> Result<()> {
    match cli.command {
        Commands::Check { path } => check(path),
        Commands::Show { path, json } => show(path, json),
        Commands::Fmt { path, output } => fmt(path, output),
        Commands::Init { path } => init(path),
    }
}

fn check(path: PathBuf) -> Result<()> {
    let mut manager = ConfigManager::new();
    manager.load_from_file(&path)?;

    let config = manager.configuration();
    let groups = config.groups.as_ref().map(Vec::len).unwrap_or(0);
    let grouped_items: usize = config
        .groups
        .iter()
        .flatten()
        .map(|g| g.items.len())
        .sum();
    let items = config.items.as_ref().map(Vec::len).unwrap_or(0);

    println!(
        "{}: OK (version {}, {} group(s), {} grouped item(s), {} top-level item(s))",
        path.display(),
        config.version,
        groups,
        grouped_items,
        items
    );
    Ok(())
}

fn show(path: PathBuf, json: bool) -> Result<()> {
    let mut manager = ConfigManager::new();
    manager.load_from_file(&path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(manager.configuration())?);
    } else {
        print!("{}", serializer::serialize(manager.configuration())?);
    }
    Ok(())
}

fn fmt(path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let mut manager = ConfigManager::new();
    manager.load_from_file(&path)?;

    let target = output.unwrap_or(path);
    manager.save_to_file(&target)?;
    debug!(path = %target.display(), "canonical form written");
    Ok(())
}

fn init(path: Option<PathBuf>) -> Result<()> {
    let target = path.unwrap_or_else(ConfigManager::default_config_path);
    if target.exists() {
        anyhow::bail!("refusing to overwrite existing file: {}", target.display());
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    serializer::serialize_to_file(&starter_configuration(), &target)?;
    println!("wrote starter configuration to {}", target.display());
    Ok(())
}

fn starter_configuration() -> Configuration {
    Configuration {
        version: "1.0".to_string(),
        groups: None,
        items: Some(vec![Item {
            name: Some("example".to_string()),
            kind: ItemType::Web,
            value: "https://example.com".to_string(),
            size: None,
            refresh_frequency: Some(300),
        }]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validator;

    #[test]
    fn starter_configuration_is_valid() {
        assert!(validator::validate(&starter_configuration()).is_ok());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "anything").unwrap();
        assert!(init(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn fmt_rewrites_in_canonical_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("longview.yaml");
        std::fs::write(
            &path,
            "items:\n  - type: web\n    value: https://example.com\nversion: \"1.0\"\n",
        )
        .unwrap();

        fmt(path.clone(), None).unwrap();

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.starts_with("version:"), "{rewritten}");
    }
}
