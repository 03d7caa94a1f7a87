use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::UsageError;

pub const ARCHIVE_EXTENSION: &str = ".jar";
pub const CLASS_SUFFIX: &str = ".class";
pub const MILLIS_ONE_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Archive,
    Directory,
}

/// One validated `---jar_paths` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInput {
    /// The path as typed on the command line, used in report lines.
    pub raw: String,
    pub path: PathBuf,
    pub kind: InputKind,
}

impl ScanInput {
    pub fn resolve(raw: &str) -> Result<Self, UsageError> {
        let path =
            std::path::absolute(raw).map_err(|_| UsageError::NotExists(PathBuf::from(raw)))?;
        let meta = fs::metadata(&path).map_err(|_| UsageError::NotExists(path.clone()))?;

        let kind = if meta.is_dir() {
            InputKind::Directory
        } else {
            InputKind::Archive
        };

        if kind == InputKind::Archive && !has_archive_name(&path) {
            return Err(UsageError::NotArchive(path));
        }

        if !is_readable(&path, kind) {
            return Err(UsageError::Unreadable(path));
        }

        Ok(Self {
            raw: raw.to_string(),
            path,
            kind,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub inputs: Vec<ScanInput>,
    pub class_name: String,
    pub method_name: Option<String>,
}

impl SearchConfig {
    /// Validates the parsed flags in command-line order, stopping at the first problem.
    pub fn from_cli(cli: Cli) -> Result<Self, UsageError> {
        let jar_paths = cli
            .jar_paths
            .ok_or(UsageError::MissingFlag("---jar_paths"))?;
        let inputs = jar_paths
            .split(',')
            .filter(|s| !s.is_empty())
            .map(ScanInput::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        if inputs.is_empty() {
            return Err(UsageError::InvalidJarPaths);
        }

        let class_name = cli
            .class_name
            .ok_or(UsageError::MissingFlag("---class_name"))?;
        if class_name.trim().is_empty() {
            return Err(UsageError::InvalidClassName);
        }

        Ok(Self {
            inputs,
            class_name,
            method_name: cli.method_name,
        })
    }
}

pub fn has_archive_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(ARCHIVE_EXTENSION))
}

fn is_readable(path: &Path, kind: InputKind) -> bool {
    match kind {
        InputKind::Directory => fs::read_dir(path).is_ok(),
        InputKind::Archive => fs::File::open(path).is_ok(),
    }
}
