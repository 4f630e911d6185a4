//! Subject catalog loading.
//!
//! A catalog is a text file with one subject per line. Lines are read as CSV
//! records and only the first field is used, so a file written by a
//! spreadsheet or a CSV writer loads the same as a plain list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{RecordError, Result};

/// Ordered, duplicate-free list of subject names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    subjects: Vec<String>,
}

impl Catalog {
    /// Read a catalog from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            log::error!(
                "Failed to read subject catalog from {}: {}",
                path.display(),
                source
            );
            RecordError::CatalogRead {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let catalog = Self::parse(&content)?;
        log::info!(
            "Loaded {} subjects from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog text. Blank lines are skipped and repeated names keep
    /// the position of their first occurrence.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let names = content
            .lines()
            .map(first_field)
            .filter(|name| !name.is_empty());

        Self::from_names(names)
    }

    /// Build a catalog from names already in memory.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let subjects: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| {
                let first = seen.insert(name.clone());
                if !first {
                    log::debug!("Ignoring repeated catalog entry '{}'", name);
                }
                first
            })
            .collect();

        if subjects.is_empty() {
            log::error!("{}", RecordError::EmptyCatalog);
            return Err(RecordError::EmptyCatalog);
        }
        Ok(Self { subjects })
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.subjects.iter().any(|s| s == name)
    }
}

/// First field of a CSV record, unquoted and trimmed.
///
/// Surrounding whitespace is not part of a subject name. Each line is one
/// record, so a quoted field cannot span lines.
fn first_field(line: &str) -> String {
    let line = line.trim();

    let Some(quoted) = line.strip_prefix('"') else {
        return line.split(',').next().unwrap_or("").trim().to_string();
    };

    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            if chars.peek() == Some(&'"') {
                chars.next();
                field.push('"');
            } else {
                break;
            }
        } else {
            field.push(ch);
        }
    }
    field.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NINE_SUBJECTS: &str = "Математика\nФизика\nХимия\nБиология\nИстория\n\
                                 Литература\nИностранный язык\nИнформатика\nГеография\n";

    #[test]
    fn test_parse_one_subject_per_line() {
        let catalog = Catalog::parse(NINE_SUBJECTS).unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.subjects()[0], "Математика");
        assert_eq!(catalog.subjects()[6], "Иностранный язык");
        assert_eq!(catalog.subjects()[8], "География");
    }

    #[test]
    fn test_parse_uses_first_csv_field() {
        let catalog = Catalog::parse("Math,core\r\n\"Art, modern\",elective\nMusic\n").unwrap();
        assert_eq!(catalog.subjects(), &["Math", "Art, modern", "Music"]);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let catalog = Catalog::parse("  Math  ,core\n\t\" Physics \"\n").unwrap();
        assert_eq!(catalog.subjects(), &["Math", "Physics"]);
    }

    #[test]
    fn test_parse_unescapes_doubled_quotes() {
        let catalog = Catalog::parse("\"The \"\"Classics\"\"\"\n").unwrap();
        assert_eq!(catalog.subjects(), &["The \"Classics\""]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_bom() {
        let catalog = Catalog::parse("\u{feff}Math\n\n   \nPhysics\n").unwrap();
        assert_eq!(catalog.subjects(), &["Math", "Physics"]);
    }

    #[test]
    fn test_parse_drops_repeated_names() {
        let catalog = Catalog::parse("Math\nPhysics\nMath\n").unwrap();
        assert_eq!(catalog.subjects(), &["Math", "Physics"]);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(Catalog::parse(""), Err(RecordError::EmptyCatalog)));
        assert!(matches!(
            Catalog::parse("\n,\n\"\"\n"),
            Err(RecordError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("subjects.csv");
        fs::write(&path, NINE_SUBJECTS).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.contains("Химия"));
        assert!(!catalog.contains("Астрология"));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.csv");
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, RecordError::CatalogRead { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }
}
