//! `gradebook record`: apply one subject/grade/test triple and print the record.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use gradebook::config::Config;
use gradebook::name::NameAlphabet;
use gradebook::student::StudentRecord;
use gradebook::ui;

/// Name fields supplied on the command line
#[derive(Debug, Default)]
pub struct NameArgs {
    pub full: Option<String>,
    pub family: Option<String>,
    pub given: Option<String>,
    pub patronymic: Option<String>,
}

/// Values to record for a single subject
#[derive(Debug)]
pub struct Entry {
    pub subject: String,
    pub grade: Option<i64>,
    pub test_result: Option<i64>,
}

pub struct RecordOptions {
    pub catalog: Option<PathBuf>,
    pub alphabet: Option<NameAlphabet>,
    pub json: bool,
}

pub fn cmd_record(
    config: &Config,
    names: &NameArgs,
    entry: &Entry,
    options: &RecordOptions,
) -> Result<()> {
    let catalog_path = options.catalog.as_ref().unwrap_or(&config.catalog);
    let alphabet = options.alphabet.unwrap_or(config.alphabet);

    let mut student = StudentRecord::from_catalog_file(catalog_path, alphabet)?;
    apply_names(&mut student, names)?;

    if let Some(grade) = entry.grade {
        student
            .add_grade(&entry.subject, grade)
            .with_context(|| format!("Failed to record grade for '{}'", entry.subject))?;
    }
    if let Some(result) = entry.test_result {
        student
            .add_test_result(&entry.subject, result)
            .with_context(|| format!("Failed to record test result for '{}'", entry.subject))?;
    }

    let report = student.report();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", student);
    if !ui::is_quiet() {
        println!();
        for line in ui::report_lines(&report) {
            println!("{}", line);
        }
    }
    if let Some(subject) = student.subject(&entry.subject) {
        println!(
            "{} {}: grade avg {}, test avg {}",
            "✓".green(),
            subject.name().cyan(),
            ui::format::average(subject.average_grade()),
            ui::format::average(subject.average_test_result())
        );
    }

    Ok(())
}

fn apply_names(student: &mut StudentRecord, names: &NameArgs) -> Result<()> {
    if let Some(full) = &names.full {
        student.set_full_name(full).context("Invalid --name")?;
    }
    if let Some(family) = &names.family {
        student.set_family_name(family).context("Invalid --family")?;
    }
    if let Some(given) = &names.given {
        student.set_given_name(given).context("Invalid --given")?;
    }
    if let Some(patronymic) = &names.patronymic {
        student
            .set_patronymic(patronymic)
            .context("Invalid --patronymic")?;
    }
    Ok(())
}
