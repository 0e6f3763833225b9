//! Configuration management for the comment stat widget.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file, overridden by command-line values

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_COUNT_EL: &str = "#ArtalkCount";
pub const DEFAULT_PV_EL: &str = "#ArtalkPV";
pub const DEFAULT_PAGE_KEY: &str = "/";

/// Command-line arguments for the stat widget runner
#[derive(Debug, Parser)]
#[command(name = "comment-stat")]
#[command(about = "Fill page-view and comment counters from a comment server")]
#[command(version)]
pub struct Args {
    /// Base URL of the comment server
    #[arg(long, help = "Comment server base URL (e.g., 'https://comments.example.com')")]
    pub server: Option<String>,

    #[arg(long, help = "Site name the pages belong to")]
    pub site: Option<String>,

    /// Key of the page the widget runs on
    #[arg(long, help = "Page key of the current page")]
    pub page_key: Option<String>,

    #[arg(long, help = "Title of the current page")]
    pub page_title: Option<String>,

    #[arg(long, help = "Selector of comment count elements")]
    pub count_el: Option<String>,

    #[arg(long, help = "Selector of page view elements")]
    pub pv_el: Option<String>,

    /// Do not record a page view for the current page
    #[arg(long)]
    pub no_pv_add: bool,

    #[arg(long, help = "JSON file holding the DOM elements to fill")]
    pub dom: Option<PathBuf>,

    /// Config file; defaults to the user config directory
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for the runner
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Values accepted in the TOML config file
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: Option<String>,
    pub site: Option<String>,
    pub page_key: Option<String>,
    pub page_title: Option<String>,
    pub count_el: Option<String>,
    pub pv_el: Option<String>,
    pub pv_add: Option<bool>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: Option<String>,
    pub site_name: String,
    pub page_key: String,
    pub page_title: String,
    /// Selector of comment count elements, empty to disable
    pub count_el: String,
    /// Selector of page view elements, empty to disable
    pub pv_el: String,
    /// Record a page view before showing PV counts
    pub pv_add: bool,
    pub dom_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: None,
            site_name: String::new(),
            page_key: DEFAULT_PAGE_KEY.to_string(),
            page_title: String::new(),
            count_el: DEFAULT_COUNT_EL.to_string(),
            pv_el: DEFAULT_PV_EL.to_string(),
            pv_add: true,
            dom_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => Self::load_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path)?,
                _ => FileConfig::default(),
            },
        };

        Ok(Self::merge(args, file))
    }

    /// `<config dir>/comment-state/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("comment-state").join("config.toml"))
    }

    pub fn load_file(path: &Path) -> Result<FileConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn merge(args: Args, file: FileConfig) -> Self {
        let defaults = Config::default();

        let server = args.server.or(file.server).and_then(|server| {
            let trimmed = server.trim_end_matches('/').to_string();
            if trimmed.is_empty() {
                log::warn!("Ignoring empty server URL");
                None
            } else {
                Some(trimmed)
            }
        });

        Config {
            server,
            site_name: args.site.or(file.site).unwrap_or(defaults.site_name),
            page_key: args.page_key.or(file.page_key).unwrap_or(defaults.page_key),
            page_title: args
                .page_title
                .or(file.page_title)
                .unwrap_or(defaults.page_title),
            count_el: args.count_el.or(file.count_el).unwrap_or(defaults.count_el),
            pv_el: args.pv_el.or(file.pv_el).unwrap_or(defaults.pv_el),
            pv_add: !args.no_pv_add && file.pv_add.unwrap_or(defaults.pv_add),
            dom_path: args.dom,
            log_level: args.log_level,
        }
    }
}
