// Shared input handling for the lispy binary.
// Keeps the source-selection logic (string, file, pipe, interactive) out of
// the REPL loop itself.

use clap::ValueEnum;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use thiserror::Error;

/// Input source types supported by the lispy-repl binary
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum InputSource {
    /// Interactive REPL mode
    Interactive,
    /// Evaluate a string directly
    String,
    /// Evaluate a file
    File,
    /// Read from stdin pipe
    Pipe,
}

/// Configuration for input handling
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub source: InputSource,
    pub file_path: Option<PathBuf>,
    pub string_content: Option<String>,
    pub verbose: bool,
}

impl InputConfig {
    pub fn from_file(file_path: PathBuf, verbose: bool) -> Self {
        Self {
            source: InputSource::File,
            file_path: Some(file_path),
            string_content: None,
            verbose,
        }
    }

    pub fn from_string(content: String, verbose: bool) -> Self {
        Self {
            source: InputSource::String,
            file_path: None,
            string_content: Some(content),
            verbose,
        }
    }

    pub fn from_pipe(verbose: bool) -> Self {
        Self {
            source: InputSource::Pipe,
            file_path: None,
            string_content: None,
            verbose,
        }
    }
}

/// Result of reading input content
#[derive(Debug)]
pub struct InputContent {
    pub content: String,
    pub source_name: String,
}

/// Read input content based on the configuration
pub fn read_input_content(config: &InputConfig) -> Result<InputContent, InputError> {
    match config.source {
        InputSource::File => {
            let file_path = config
                .file_path
                .as_ref()
                .ok_or(InputError::MissingFileArgument)?;

            if config.verbose {
                println!("Reading from file: {}", file_path.display());
            }

            let content = fs::read_to_string(file_path).map_err(|error| {
                InputError::FileReadError {
                    path: file_path.clone(),
                    error,
                }
            })?;

            Ok(InputContent {
                content,
                source_name: file_path.to_string_lossy().to_string(),
            })
        }

        InputSource::String => {
            let content = config
                .string_content
                .as_ref()
                .ok_or(InputError::MissingStringArgument)?
                .clone();

            Ok(InputContent {
                content,
                source_name: "<string>".to_string(),
            })
        }

        InputSource::Pipe => {
            if config.verbose {
                println!("Reading from stdin pipe");
            }

            let stdin = io::stdin();
            let mut content = String::new();

            for line in stdin.lock().lines() {
                let line = line.map_err(InputError::StdinReadError)?;
                content.push_str(&line);
                content.push('\n');
            }

            Ok(InputContent {
                content,
                source_name: "<stdin>".to_string(),
            })
        }

        InputSource::Interactive => Err(InputError::InteractiveNotSupported),
    }
}

/// Validate input arguments for a given source type
pub fn validate_input_args(
    source: &InputSource,
    file_path: &Option<PathBuf>,
    string_content: &Option<String>,
) -> Result<(), InputError> {
    match source {
        InputSource::File if file_path.is_none() => Err(InputError::MissingFileArgument),
        InputSource::String if string_content.is_none() => Err(InputError::MissingStringArgument),
        _ => Ok(()),
    }
}

/// Errors that can occur during input handling
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Error: --file argument required when using --input file")]
    MissingFileArgument,

    #[error("Error: --string argument required when using --input string")]
    MissingStringArgument,

    #[error("Error reading file '{path}': {error}")]
    FileReadError {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Error reading from stdin: {0}")]
    StdinReadError(std::io::Error),

    #[error("Interactive mode reads lines itself; no content to collect")]
    InteractiveNotSupported,
}
