use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use ghas_demo_core::gh::DEFAULT_PROGRAM;

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "GitHub Advanced Security Demo Console")]
pub struct Config {
    /// Enable debug logging (stderr)
    #[arg(short, long)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sample project that receives injected vulnerabilities
    #[arg(short = 'p', long)]
    pub project_dir: Option<PathBuf>,

    /// GitHub CLI executable
    #[arg(long = "gh")]
    pub gh_program: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Application settings (from config file)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// GitHub CLI executable name or path
    #[serde(default = "default_gh_program")]
    pub gh_program: String,

    /// Sample project directory (defaults to the current directory)
    #[serde(default)]
    pub project_dir: Option<PathBuf>,

    /// Kill `gh` after this many seconds (unset = wait indefinitely)
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,

    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

fn default_gh_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

/// UI-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Enable color output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Clear the terminal before showing the banner
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Show the ASCII banner at startup
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color: default_true(),
            clear_screen: default_true(),
            show_banner: default_true(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gh_program: default_gh_program(),
            project_dir: None,
            command_timeout_secs: None,
            ui: UiSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must exist
        if let Some(p) = path {
            return Self::load_file(p);
        }

        let default_paths = [
            dirs::config_dir().map(|p| p.join("ghas-demo/config.toml")),
            dirs::home_dir().map(|p| p.join(".config/ghas-demo/config.toml")),
            dirs::home_dir().map(|p| p.join(".ghas-demo.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_file(path);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Merge CLI config into settings (CLI takes precedence)
    pub fn merge_cli(&mut self, cli: &Config) {
        if let Some(ref dir) = cli.project_dir {
            self.project_dir = Some(dir.clone());
        }
        if let Some(ref program) = cli.gh_program {
            self.gh_program = program.clone();
        }
        if cli.no_color {
            self.ui.color = false;
        }
    }

    /// Validate and normalize settings values
    pub fn validate(&mut self) {
        if self.gh_program.trim().is_empty() {
            self.gh_program = default_gh_program();
        }
        if self.command_timeout_secs == Some(0) {
            self.command_timeout_secs = None;
        }
    }

    /// Timeout applied to each `gh` invocation
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }

    /// Directory that receives injected files
    pub fn project_root(&self) -> PathBuf {
        self.project_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
