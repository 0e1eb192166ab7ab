//! Path management for txconvert
//!
//! The converter works on two fixed file names inside a base directory:
//! `original` (the source export) and `result.csv` (the converted file).
//! The base directory is the current working directory unless overridden
//! for tests.

use std::path::PathBuf;

use crate::error::ConvertError;

/// File name of the source export
pub const INPUT_FILE_NAME: &str = "original";

/// File name of the converted output
pub const OUTPUT_FILE_NAME: &str = "result.csv";

/// Resolves the input and output files used by a conversion run
#[derive(Debug, Clone)]
pub struct ConverterPaths {
    /// Directory holding both files
    base_dir: PathBuf,
}

impl ConverterPaths {
    /// Create paths rooted at the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ConvertError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ConvertError::Io(format!("Failed to resolve current directory: {}", e))
        })?;
        Ok(Self { base_dir })
    }

    /// Create ConverterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the source export
    pub fn input_file(&self) -> PathBuf {
        self.base_dir.join(INPUT_FILE_NAME)
    }

    /// Path to the converted output
    pub fn output_file(&self) -> PathBuf {
        self.base_dir.join(OUTPUT_FILE_NAME)
    }

    /// Fail early with a readable message if the source export is absent
    pub fn check_input_exists(&self) -> Result<(), ConvertError> {
        let input = self.input_file();
        if !input.is_file() {
            return Err(ConvertError::Io(format!(
                "Input file not found: {}",
                input.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConverterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.input_file(), temp_dir.path().join("original"));
        assert_eq!(paths.output_file(), temp_dir.path().join("result.csv"));
    }

    #[test]
    fn test_check_input_exists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConverterPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = paths.check_input_exists().unwrap_err();
        assert!(err.to_string().contains("Input file not found"));

        std::fs::write(paths.input_file(), "DATE\n").unwrap();
        assert!(paths.check_input_exists().is_ok());
    }
}
