use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseClass {
    Success,
    LexError,
    ParseError,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpectedOutcome {
    pub output_file: Option<String>,
    pub dump_file: Option<String>,
    pub error_contains: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CaseSpec {
    pub class: CaseClass,
    #[serde(default)]
    pub dump_trees: bool,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub name: String,
    pub dir: PathBuf,
    pub program_path: PathBuf,
    pub spec: CaseSpec,
}

const CASE_FILE: &str = "case.yaml";
const PROGRAM_FILE: &str = "program.lisp";

impl Case {
    /// Reads the case in `dir`. Directories without a `case.yaml` are not
    /// cases and yield `None`.
    pub fn from_dir(dir: &Path) -> Result<Option<Self>> {
        let case_path = dir.join(CASE_FILE);
        if !dir.is_dir() || !case_path.exists() {
            return Ok(None);
        }

        let name = dir
            .file_name()
            .and_then(|value| value.to_str())
            .with_context(|| format!("Invalid case directory name {}", dir.display()))?
            .to_string();
        let case = Self {
            name,
            dir: dir.to_path_buf(),
            program_path: dir.join(PROGRAM_FILE),
            spec: serde_yaml::from_str(&read_file(&case_path)?)
                .with_context(|| format!("Parsing {}", case_path.display()))?,
        };
        ensure!(
            case.program_path.exists(),
            "Case {} has no {PROGRAM_FILE}",
            case.name
        );
        Ok(Some(case))
    }

    pub fn read_text(&self, relative_path: &str) -> Result<String> {
        read_file(&self.dir.join(relative_path))
            .with_context(|| format!("Reading fixture file of case {}", self.name))
    }

    pub fn read_program(&self) -> Result<String> {
        read_file(&self.program_path)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
}

/// Every case under `programs_dir`, ordered by name.
pub fn load_cases(programs_dir: &Path) -> Result<Vec<Case>> {
    let entries =
        fs::read_dir(programs_dir).with_context(|| format!("Reading {}", programs_dir.display()))?;

    let mut cases = Vec::new();
    for entry in entries {
        if let Some(case) = Case::from_dir(&entry?.path())? {
            cases.push(case);
        }
    }
    ensure!(!cases.is_empty(), "No cases under {}", programs_dir.display());

    cases.sort_by(|left, right| left.name.cmp(&right.name));
    Ok(cases)
}

/// Line endings and trailing whitespace do not count when comparing
/// generated C against an expected file.
pub fn normalize_output(output: &str) -> String {
    output.replace("\r\n", "\n").trim_end().to_string()
}
