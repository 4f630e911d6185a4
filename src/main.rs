//! CLI entry point for gradebook.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use cmd::record::{Entry, NameArgs, RecordOptions};
use gradebook::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("GRADEBOOK_QUIET", "1");
    }

    match cli.command {
        Commands::Record {
            catalog,
            name,
            family,
            given,
            patronymic,
            alphabet,
            subject,
            grade,
            test_result,
            json,
        } => {
            let config = load_config()?;
            cmd::record::cmd_record(
                &config,
                &NameArgs {
                    full: name,
                    family,
                    given,
                    patronymic,
                },
                &Entry {
                    subject,
                    grade,
                    test_result,
                },
                &RecordOptions {
                    catalog,
                    alphabet,
                    json,
                },
            )
        }
        Commands::Subjects { catalog } => {
            let config = load_config()?;
            cmd::subjects::cmd_subjects(&config, catalog.as_ref())
        }
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}

/// Load configuration and install the logger it describes.
fn load_config() -> Result<Config> {
    let config = Config::load()?;
    gradebook::logging::init(&config.log)?;
    Ok(config)
}
