use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// The nine subjects the default catalog ships with
pub const DEFAULT_SUBJECTS: [&str; 9] = [
    "Математика",
    "Физика",
    "Химия",
    "Биология",
    "История",
    "Литература",
    "Иностранный язык",
    "Информатика",
    "География",
];

/// TestHarness provides an isolated working directory with a subject catalog
/// and runs the gradebook binary inside it.
pub struct TestHarness {
    pub dir: TempDir,
    pub catalog_path: PathBuf,
    pub gradebook_binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness whose `subjects.csv` holds the default catalog.
    pub fn new() -> Self {
        Self::with_catalog(&DEFAULT_SUBJECTS.join("\n"))
    }

    /// Creates a harness with custom catalog content.
    pub fn with_catalog(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("subjects.csv");
        fs::write(&catalog_path, content).expect("Failed to write catalog");

        TestHarness {
            dir: temp_dir,
            catalog_path,
            gradebook_binary: PathBuf::from(env!("CARGO_BIN_EXE_gradebook")),
        }
    }

    /// Writes `.gradebook/config.md` with the given content.
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        let config_dir = self.path().join(".gradebook");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(config_dir.join("config.md"), content).expect("Failed to write config");
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the gradebook binary with the given arguments in the harness directory.
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.gradebook_binary)
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run gradebook")
    }

    /// Contents of the error log, empty if nothing was logged.
    #[allow(dead_code)]
    pub fn error_log(&self) -> String {
        fs::read_to_string(self.path().join("errors.log")).unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
