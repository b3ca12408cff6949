use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::domain::{AppError, OutputFormat, parse_response};

/// Options for parsing a saved model response.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub format: OutputFormat,
    /// Field identifier used as XML tag or JSON key.
    pub field: String,
    /// Response file; stdin when absent.
    pub input: Option<PathBuf>,
}

/// Extract the field value from a saved response.
pub fn execute(options: &ParseOptions) -> Result<String, AppError> {
    let raw = match &options.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    parse_response(&raw, options.format, &options.field)
}
