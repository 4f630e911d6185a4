//! Student record: a validated name and a closed set of subjects.
//!
//! The set of subjects is fixed when the record is built from a catalog.
//! Grades and test results can only be added to subjects that already exist.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{RecordError, Result};
use crate::name::{NameAlphabet, PersonName};
use crate::subject::Subject;

#[derive(Debug, Clone)]
pub struct StudentRecord {
    name: PersonName,
    subjects: Vec<Subject>,
    index: HashMap<String, usize>,
}

impl StudentRecord {
    /// Create a record with one empty subject per catalog entry, in catalog order.
    pub fn new(catalog: &Catalog, alphabet: NameAlphabet) -> Self {
        let subjects: Vec<Subject> = catalog.subjects().iter().map(Subject::new).collect();
        let index = subjects
            .iter()
            .enumerate()
            .map(|(i, subject)| (subject.name().to_string(), i))
            .collect();

        log::debug!("Created student record with {} subjects", subjects.len());

        Self {
            name: PersonName::new(alphabet),
            subjects,
            index,
        }
    }

    /// Load the catalog at `path` and create a record from it.
    pub fn from_catalog_file(path: &Path, alphabet: NameAlphabet) -> Result<Self> {
        let catalog = Catalog::load(path)?;
        Ok(Self::new(&catalog, alphabet))
    }

    pub fn set_family_name(&mut self, value: &str) -> Result<()> {
        self.name.set_family_name(value)
    }

    pub fn family_name(&self) -> Option<&str> {
        self.name.family_name()
    }

    pub fn set_given_name(&mut self, value: &str) -> Result<()> {
        self.name.set_given_name(value)
    }

    pub fn given_name(&self) -> Option<&str> {
        self.name.given_name()
    }

    pub fn set_patronymic(&mut self, value: &str) -> Result<()> {
        self.name.set_patronymic(value)
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.name.patronymic()
    }

    pub fn set_full_name(&mut self, value: &str) -> Result<()> {
        self.name.set_full_name(value)
    }

    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.index.get(name).map(|&i| &self.subjects[i])
    }

    /// Subjects in catalog order.
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    pub fn subject_names(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(Subject::name)
    }

    fn subject_mut(&mut self, name: &str) -> Result<&mut Subject> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.subjects[i]),
            None => {
                let err = RecordError::UnknownSubject(name.to_string());
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    pub fn add_grade(&mut self, subject: &str, value: i64) -> Result<()> {
        self.subject_mut(subject)?.add_grade(value)
    }

    pub fn add_test_result(&mut self, subject: &str, value: i64) -> Result<()> {
        self.subject_mut(subject)?.add_test_result(value)
    }

    /// Mean of the per-subject grade averages.
    ///
    /// Every subject counts once, including subjects without grades, which
    /// contribute 0. This is not the mean over all individual grades.
    pub fn average_grade(&self) -> f64 {
        let total: f64 = self.subjects.iter().map(Subject::average_grade).sum();
        total / self.subjects.len() as f64
    }

    pub fn report(&self) -> RecordReport {
        RecordReport {
            student: self.name.full_name(),
            subjects: self
                .subjects
                .iter()
                .map(|subject| SubjectReport {
                    name: subject.name().to_string(),
                    grades: subject.grades().to_vec(),
                    test_results: subject.test_results().to_vec(),
                    average_grade: subject.average_grade(),
                    average_test_result: subject.average_test_result(),
                })
                .collect(),
            average_grade: self.average_grade(),
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}, Subjects: {}",
            self.name.full_name(),
            self.subject_names().collect::<Vec<_>>().join(", ")
        )
    }
}

/// Snapshot of a record's statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport {
    pub student: String,
    pub subjects: Vec<SubjectReport>,
    pub average_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectReport {
    pub name: String,
    pub grades: Vec<u8>,
    pub test_results: Vec<u8>,
    pub average_grade: f64,
    pub average_test_result: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(names: &[&str]) -> StudentRecord {
        let catalog = Catalog::from_names(names.iter().copied()).unwrap();
        StudentRecord::new(&catalog, NameAlphabet::Latin)
    }

    #[test]
    fn test_new_has_one_empty_subject_per_entry() {
        let names = [
            "Math",
            "Physics",
            "Chemistry",
            "Biology",
            "History",
            "Literature",
            "Foreign Language",
            "Informatics",
            "Geography",
        ];
        let record = record(&names);

        assert_eq!(record.subject_names().collect::<Vec<_>>(), names);
        for subject in record.subjects() {
            assert!(subject.grades().is_empty());
            assert!(subject.test_results().is_empty());
        }
    }

    #[test]
    fn test_unknown_subject_is_rejected_for_any_value() {
        let mut record = record(&["Math"]);
        for value in [-1, 0, 3, 50, 1000] {
            assert!(matches!(
                record.add_grade("Astrology", value),
                Err(RecordError::UnknownSubject(ref s)) if s == "Astrology"
            ));
            assert!(matches!(
                record.add_test_result("Astrology", value),
                Err(RecordError::UnknownSubject(_))
            ));
        }
        assert!(record.subject("Astrology").is_none());
        assert_eq!(record.subjects().count(), 1);
    }

    #[test]
    fn test_subject_lookup_is_exact() {
        let mut record = record(&["Math"]);
        assert!(record.add_grade("math", 5).is_err());
        assert!(record.add_grade(" Math", 5).is_err());
        assert!(record.subject("Math").unwrap().grades().is_empty());
    }

    #[test]
    fn test_add_delegates_validation_to_subject() {
        let mut record = record(&["Math"]);
        assert!(matches!(
            record.add_grade("Math", 6),
            Err(RecordError::GradeOutOfRange(6))
        ));
        assert!(matches!(
            record.add_test_result("Math", 101),
            Err(RecordError::TestResultOutOfRange(101))
        ));
        record.add_grade("Math", 5).unwrap();
        record.add_test_result("Math", 94).unwrap();

        let math = record.subject("Math").unwrap();
        assert_eq!(math.grades(), &[5]);
        assert_eq!(math.test_results(), &[94]);
    }

    #[test]
    fn test_average_is_mean_of_subject_means() {
        let mut record = record(&["Math", "Physics"]);
        record.set_family_name("Ivanov").unwrap();
        record.add_grade("Math", 5).unwrap();
        record.add_grade("Math", 4).unwrap();

        assert_eq!(record.subject("Math").unwrap().average_grade(), 4.5);
        assert_eq!(record.average_grade(), 2.25);
    }

    #[test]
    fn test_average_is_not_weighted_by_grade_count() {
        let mut record = record(&["Math", "Physics"]);
        for grade in [5, 5, 5] {
            record.add_grade("Math", grade).unwrap();
        }
        record.add_grade("Physics", 2).unwrap();

        assert_eq!(record.average_grade(), 3.5);
    }

    #[test]
    fn test_average_without_grades_is_zero() {
        let record = record(&["Math", "Physics"]);
        assert_eq!(record.average_grade(), 0.0);
    }

    #[test]
    fn test_display() {
        let catalog = Catalog::from_names(["Математика", "Физика"]).unwrap();
        let mut record = StudentRecord::new(&catalog, NameAlphabet::Cyrillic);
        record
            .set_full_name("Белоусов Ярослав Александрович")
            .unwrap();

        assert_eq!(
            record.to_string(),
            "Student: Белоусов Ярослав Александрович, Subjects: Математика, Физика"
        );
    }

    #[test]
    fn test_invalid_name_leaves_record_unchanged() {
        let mut record = record(&["Math"]);
        record.set_given_name("Ivan").unwrap();
        assert!(record.set_given_name("ivan").is_err());
        assert_eq!(record.given_name(), Some("Ivan"));
        assert_eq!(record.family_name(), None);
    }

    #[test]
    fn test_report() {
        let mut record = record(&["Math", "Physics"]);
        record.set_family_name("Ivanov").unwrap();
        record.add_grade("Math", 4).unwrap();
        record.add_test_result("Physics", 90).unwrap();
        record.add_test_result("Physics", 100).unwrap();

        let report = record.report();
        assert_eq!(report.student, "Ivanov");
        assert_eq!(report.average_grade, 2.0);
        assert_eq!(report.subjects.len(), 2);
        assert_eq!(report.subjects[0].name, "Math");
        assert_eq!(report.subjects[0].average_grade, 4.0);
        assert_eq!(report.subjects[1].average_test_result, 95.0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["subjects"][1]["test_results"], serde_json::json!([90, 100]));
    }
}
