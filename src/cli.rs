//! CLI argument definitions for gradebook.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use gradebook::name::NameAlphabet;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(version)]
#[command(about = "Student grades and test results per subject", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    gradebook subjects --catalog subjects.csv\n    gradebook record --name \"Белоусов Ярослав Александрович\" --subject Математика --grade 5 --test 94"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a grade and/or test result for one subject and print the record
    Record {
        /// Subject catalog, one subject per line (defaults to the configured catalog)
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
        /// Full name as "Family Given Patronymic"
        #[arg(long, conflicts_with_all = ["family", "given", "patronymic"])]
        name: Option<String>,
        /// Family name
        #[arg(long)]
        family: Option<String>,
        /// Given name
        #[arg(long)]
        given: Option<String>,
        /// Patronymic
        #[arg(long)]
        patronymic: Option<String>,
        /// Alphabet names are validated against (defaults to the configured alphabet)
        #[arg(long, value_enum)]
        alphabet: Option<NameAlphabet>,
        /// Subject the grade and test result belong to
        #[arg(long)]
        subject: String,
        /// Grade from 2 to 5
        #[arg(long, allow_negative_numbers = true, required_unless_present = "test_result")]
        grade: Option<i64>,
        /// Test result from 0 to 100
        #[arg(long = "test", allow_negative_numbers = true)]
        test_result: Option<i64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the subjects in the catalog
    Subjects {
        /// Subject catalog, one subject per line (defaults to the configured catalog)
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },
    /// Show version information
    Version {
        /// Show commit hash and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
