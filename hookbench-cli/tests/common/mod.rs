//! Shared fixtures for hookbench integration tests
//!
//! A [`TestProject`] is a complete project root in a temporary directory: a
//! lefthook descriptor, one rule file, a fixture archive and a
//! `hookbench.toml` pointing at a fake hook runner. The fake runner is a shell
//! script that records the workspace state during `install` and runs a
//! caller-provided body for `run`.

#![allow(dead_code)]

use hookbench::{run_cli, Cli};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::FileOptions;

/// Sample file contents before any hook touches them
pub const SAMPLE_PY: &str = "import sys,os\nprint(os.getcwd(), sys.argv)\n";
pub const NOTES_MD: &str = "# Notes\nSome text\n";

/// `run` body: reformat sample.py, stage it and report failure like a fixer hook
pub const REFORMAT_AND_FAIL: &str = r#"printf 'import os\nimport sys\n\nprint(os.getcwd(), sys.argv)\n' > sample.py
git add sample.py
echo "ruff: 1 file reformatted"
exit 1"#;

/// `run` body: every hook passes without touching files
pub const PASS_CLEAN: &str = r#"echo "all hooks passed"
exit 0"#;

/// `run` body: a linter fails without changing anything
pub const FAIL_CLEAN: &str = r#"echo "markdownlint: MD041 first line" >&2
exit 1"#;

/// `run` body: modify a file in the working tree only
pub const EDIT_UNSTAGED: &str = r#"printf 'trailing line\n' >> notes.md
exit 0"#;

pub struct TestProject {
    root: TempDir,
    bin: TempDir,
    temp_root: TempDir,
    capture: TempDir,
}

impl TestProject {
    /// Project with default layout and a fake runner using `run_body`
    pub fn new(run_body: &str) -> Self {
        let project = Self {
            root: TempDir::new().unwrap(),
            bin: TempDir::new().unwrap(),
            temp_root: TempDir::new().unwrap(),
            capture: TempDir::new().unwrap(),
        };
        project.write_hook_configuration();
        project.write_fixture(&[
            ("test_files/", ""),
            ("test_files/sample.py", SAMPLE_PY),
            ("test_files/notes.md", NOTES_MD),
        ]);
        project.write_runner("exit 0", run_body);
        project.write_config("");
        project
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn fixture(&self) -> PathBuf {
        self.root().join("example_files.zip")
    }

    pub fn runner(&self) -> PathBuf {
        self.bin.path().join("lefthook")
    }

    pub fn temp_root(&self) -> &Path {
        self.temp_root.path()
    }

    /// Text the fake runner recorded under `name` during `install`
    pub fn captured(&self, name: &str) -> String {
        fs::read_to_string(self.capture.path().join(name)).unwrap()
    }

    /// Whether every temporary workspace has been removed
    pub fn temp_root_is_empty(&self) -> bool {
        fs::read_dir(self.temp_root()).unwrap().next().is_none()
    }

    fn write_hook_configuration(&self) {
        fs::write(
            self.root().join("lefthook.yml"),
            "extends:\n  - .pre-commit/python.yml\n",
        )
        .unwrap();
        fs::create_dir_all(self.root().join(".pre-commit")).unwrap();
        fs::write(
            self.root().join(".pre-commit/python.yml"),
            "pre-commit:\n  commands:\n    ruff-format:\n      glob: \"*.py\"\n      run: ruff format {staged_files}\n      stage_fixed: true\n",
        )
        .unwrap();
    }

    /// Replace the fixture archive with the given entries
    pub fn write_fixture(&self, entries: &[(&str, &str)]) {
        let file = fs::File::create(self.fixture()).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        for (name, contents) in entries {
            if name.ends_with('/') {
                zip.add_directory(*name, FileOptions::default()).unwrap();
            } else {
                zip.start_file(*name, FileOptions::default()).unwrap();
                zip.write_all(contents.as_bytes()).unwrap();
            }
        }
        zip.finish().unwrap();
    }

    /// Replace the fake runner
    pub fn write_runner(&self, install_body: &str, run_body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let capture = self.capture.path().display();
        let script = format!(
            r#"#!/bin/sh
case "$1" in
  install)
    ls -A > "{capture}/listing"
    git config --local --get user.name > "{capture}/user.name"
    git config --local --get user.email > "{capture}/user.email"
    {install_body}
    ;;
  run)
    [ "$2" = "pre-commit" ] || exit 64
    [ "$3" = "--all-files" ] || exit 64
    {run_body}
    ;;
  *)
    exit 64
    ;;
esac
"#
        );
        let path = self.runner();
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Write `hookbench.toml` pointing at the fake runner, followed by `extra`
    pub fn write_config(&self, extra: &str) {
        self.write_config_with_temp_root(&self.temp_root().display().to_string(), extra);
    }

    /// Like [`TestProject::write_config`] with `temp_root` written verbatim
    pub fn write_config_with_temp_root(&self, temp_root: &str, extra: &str) {
        let config = format!(
            "tools = []\n\n[hook_runner]\nprogram = '{}'\n\n[workspace]\ntemp_root = '{}'\n{}",
            self.runner().display(),
            temp_root,
            extra
        );
        fs::write(self.root().join("hookbench.toml"), config).unwrap();
    }

    pub fn cli(&self, verbose: bool) -> Cli {
        Cli {
            verbose,
            debug: false,
            project_root: Some(self.root().to_path_buf()),
            fixture: Some(self.fixture()),
        }
    }

    /// Run the harness in-process; returns the exit code and the report
    pub fn run(&self, verbose: bool) -> (i32, String) {
        let mut out = Vec::new();
        let code = run_cli(&self.cli(verbose), &mut out);
        (code, String::from_utf8(out).unwrap())
    }
}
