use anyhow::Context;
use clap::Parser;
use org_roster::utils::logger;
use org_roster::{render, CliConfig, OrgError, ReportEngine, RosterFile};

fn run(config: CliConfig) -> anyhow::Result<String> {
    let roster = match &config.roster {
        Some(path) => RosterFile::from_file(path)
            .with_context(|| format!("Failed to load roster '{}'", path.display()))?,
        None => RosterFile::builtin().context("Built-in roster is invalid")?,
    };

    let org = roster.build().context("Roster validation failed")?;
    let format = config.format;
    let report = ReportEngine::new(config).run(&org)?;
    let output = render(&report, format)?;
    Ok(output)
}

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting org-roster");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            if let Some(org_error) = e.downcast_ref::<OrgError>() {
                eprintln!("💡 Suggestion: {}", org_error.recovery_suggestion());
            }
            std::process::exit(1);
        }
    }
}
