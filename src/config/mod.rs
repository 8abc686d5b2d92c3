pub mod roster;

#[cfg(feature = "cli")]
use crate::core::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::domain::ports::ReportSettings;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "org-roster")]
#[command(about = "Reports on an organization roster: team listings, salary queries and raises")]
pub struct CliConfig {
    /// TOML roster file; the built-in roster is used when omitted
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Manager whose team is analyzed (default: first manager in the roster)
    #[arg(long)]
    pub manager: Option<String>,

    /// Name to look up in the team
    #[arg(long, default_value = "Ayse")]
    pub search: String,

    /// Raise applied to every team member, in percent
    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub raise_percent: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ReportSettings for CliConfig {
    fn manager_name(&self) -> Option<&str> {
        self.manager.as_deref()
    }

    fn search_name(&self) -> &str {
        &self.search
    }

    fn raise_percent(&self) -> f64 {
        self.raise_percent
    }
}
