use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    /// Construction input that cannot drive a reading session.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ReaderError>;

pub fn load_file_safe(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ReaderError::InvalidInput(format!(
            "no such file: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ReaderError::InvalidInput(format!(
            "not a regular file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(ReaderError::EmptyFile(path.to_path_buf()));
    }

    Ok(content)
}
