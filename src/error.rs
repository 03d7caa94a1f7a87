use std::path::PathBuf;
use thiserror::Error;

/// Command-line problems that stop the program before any scanning starts.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("error: {0} not found!")]
    MissingFlag(&'static str),

    #[error("error: ---jar_paths is invalid!")]
    InvalidJarPaths,

    #[error("error: ---class_name is invalid!")]
    InvalidClassName,

    #[error("{} not exists.", .0.display())]
    NotExists(PathBuf),

    #[error("{} is not a jar file.", .0.display())]
    NotArchive(PathBuf),

    #[error("{} file or directory does not have read privilege", .0.display())]
    Unreadable(PathBuf),

    #[error("{0}")]
    Parse(#[from] clap::Error),
}
