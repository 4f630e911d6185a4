//! Per-subject grades and test results.

use std::ops::RangeInclusive;

use crate::error::{RecordError, Result};

/// Accepted grade values
pub const GRADE_RANGE: RangeInclusive<i64> = 2..=5;

/// Accepted test result values
pub const TEST_RESULT_RANGE: RangeInclusive<i64> = 0..=100;

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    name: String,
    grades: Vec<u8>,
    test_results: Vec<u8>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
            test_results: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    pub fn test_results(&self) -> &[u8] {
        &self.test_results
    }

    pub fn add_grade(&mut self, value: i64) -> Result<()> {
        if !GRADE_RANGE.contains(&value) {
            let err = RecordError::GradeOutOfRange(value);
            log::error!("{}: {}", self.name, err);
            return Err(err);
        }
        self.grades.push(value as u8);
        Ok(())
    }

    pub fn add_test_result(&mut self, value: i64) -> Result<()> {
        if !TEST_RESULT_RANGE.contains(&value) {
            let err = RecordError::TestResultOutOfRange(value);
            log::error!("{}: {}", self.name, err);
            return Err(err);
        }
        self.test_results.push(value as u8);
        Ok(())
    }

    /// Mean of recorded grades, or 0 when there are none.
    pub fn average_grade(&self) -> f64 {
        mean(&self.grades)
    }

    /// Mean of recorded test results, or 0 when there are none.
    pub fn average_test_result(&self) -> f64 {
        mean(&self.test_results)
    }
}

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    total as f64 / values.len() as f64
}
