//! Common test utilities for mule-app integration tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::{FileOptions, ZipWriter};

/// A build directory and a Mule runtime home, side by side in a temp dir
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Build directory, used as the working directory of commands
    pub path: PathBuf,
    /// Runtime home with `apps/` and `domains/`
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new project with an empty runtime home
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let home = temp.path().join("mule");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(home.join("apps")).expect("Failed to create apps directory");
        std::fs::create_dir_all(home.join("domains")).expect("Failed to create domains directory");
        Self { temp, path, home }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a zip archive with the given entries in the project
    pub fn write_zip(&self, path: &str, entries: &[&str]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        write_zip(&file_path, entries);
        file_path
    }

    pub fn apps(&self) -> PathBuf {
        self.home.join("apps")
    }

    pub fn domains(&self) -> PathBuf {
        self.home.join("domains")
    }

    /// File names in a directory, sorted
    pub fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .expect("Failed to read directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// mule-app command running in the project, with no home configured
    pub fn cmd(&self) -> Command {
        let mut cmd = mule_app_cmd();
        cmd.current_dir(&self.path);
        cmd
    }

    /// mule-app command running in the project, with `MULE_HOME` set
    pub fn cmd_with_home(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("MULE_HOME", &self.home);
        cmd
    }
}

/// Write a zip archive at `path` with one small file per entry
pub fn write_zip(path: &Path, entries: &[&str]) {
    let file = File::create(path).expect("Failed to create zip");
    let mut zip = ZipWriter::new(file);
    for entry in entries {
        zip.start_file::<_, ()>(*entry, FileOptions::default())
            .expect("Failed to start zip entry");
        zip.write_all(entry.as_bytes())
            .expect("Failed to write zip entry");
    }
    zip.finish().expect("Failed to finish zip");
}

/// mule-app command isolated from the developer's environment
#[allow(deprecated)]
pub fn mule_app_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mule-app").expect("mule-app binary");
    cmd.env_remove("MULE_HOME")
        .env_remove("MULE_APP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}
