use anyhow::Context;
use clap::Parser;

use termfolio::cli::Cli;
use termfolio::config::Config;
use termfolio::logging::init_tracing;
use termfolio::ui::{self, RunOptions};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_target()).context("failed to initialise logging")?;

    let path = cli.config_path();
    let config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    if cli.check_config {
        print_summary(&config);
        return Ok(());
    }

    ui::run(
        config,
        RunOptions {
            skip_intro: cli.skip_intro,
        },
    )?;
    Ok(())
}

fn print_summary(config: &Config) {
    let profile = &config.profile;
    let skills: usize = profile.skills.iter().map(|c| c.skills.len()).sum();
    println!("Config OK");
    println!("  name:     {}", profile.name);
    println!("  phrases:  {}", config.typewriter.phrases.len());
    println!("  skills:   {} in {} categories", skills, profile.skills.len());
    println!("  projects: {}", profile.projects.len());
}
