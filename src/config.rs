//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Postdown.
#[derive(Debug, Clone, Parser)]
#[command(name = "postdown", version, about, long_about = None)]
pub struct Config {
    /// Markdown input file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// HTML output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path is given but does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                bail!("Input file does not exist: {}", input.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_without_input_reads_stdin() {
        // Arrange
        let config = Config {
            input: None,
            output: None,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "stdin mode needs no input path");
    }

    #[test]
    fn test_validate_missing_input_fails() {
        // Arrange
        let config = Config {
            input: Some(PathBuf::from("/nonexistent/post.md")),
            output: None,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "missing input file should fail validation");
    }

    #[test]
    fn test_validate_existing_input() {
        // Arrange
        let config = Config {
            input: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")),
            output: None,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "existing input path should be valid");
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = Config {
            input: Some(PathBuf::from("post.md")),
            output: Some(PathBuf::from("post.html")),
        };

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.input, original.input);
        assert_eq!(cloned.output, original.output);
    }
}
