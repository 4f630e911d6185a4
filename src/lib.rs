//! # Gradebook
//!
//! A student's academic record: validated name fields, a fixed catalog of
//! subjects loaded from a file, and per-subject grades and test results with
//! averaging.
//!
//! ## Core Concepts
//!
//! - **Names**: family name, given name and patronymic. Each must start with
//!   an uppercase letter and contain only letters of one alphabet (and spaces).
//! - **Catalog**: the list of subjects, one per line, read once when a record
//!   is created. Subjects outside the catalog are rejected.
//! - **Grades** are marks from 2 to 5; **test results** are scores from 0 to 100.
//!
//! ## Modules
//!
//! - [`name`] - Name validation and the person-name fields
//! - [`subject`] - Grades, test results and their averages for one subject
//! - [`catalog`] - Reading the subject catalog
//! - [`student`] - The student record and its report
//! - [`config`] - Configuration from `.gradebook/config.md`
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use gradebook::name::NameAlphabet;
//! use gradebook::student::StudentRecord;
//!
//! let mut student = StudentRecord::from_catalog_file(Path::new("subjects.csv"), NameAlphabet::Cyrillic)
//!     .expect("Failed to load catalog");
//! student
//!     .set_full_name("Белоусов Ярослав Александрович")
//!     .expect("Invalid name");
//!
//! student.add_grade("Математика", 5).expect("Failed to add grade");
//! student.add_test_result("Математика", 94).expect("Failed to add test result");
//!
//! println!("{}", student);
//! println!("Average grade: {}", student.average_grade());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod name;
pub mod student;
pub mod subject;
pub mod ui;

pub use error::{RecordError, Result};

/// Default path constants for the gradebook directory structure.
pub mod paths {
    /// Configuration file: `.gradebook/config.md`
    pub const CONFIG_FILE: &str = ".gradebook/config.md";
}
