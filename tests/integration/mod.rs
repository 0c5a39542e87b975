// Integration test utilities and common code
// Centralized here so the pipeline and error-path tests share one fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories with catalog files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write a catalog file with the given YAML content
    pub fn create_catalog(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.root_path.join(name);
        fs::write(&file_path, content).expect("Failed to write test catalog");
        file_path
    }

    /// Build a catalog document from a list of optional titles; `None`
    /// produces an entry with no `idea_title` field
    pub fn catalog_from_titles(titles: &[Option<&str>]) -> String {
        titles
            .iter()
            .map(|title| match title {
                Some(title) => format!("- idea_title: \"{title}\"\n  status: draft\n"),
                None => "- idea_description: untitled entry\n".to_string(),
            })
            .collect()
    }
}
