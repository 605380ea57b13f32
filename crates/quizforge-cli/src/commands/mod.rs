//! Command implementations.

pub mod answer;
pub mod generate;

pub use self::answer::execute_answer;
pub use self::generate::execute_generate;

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read UTF-8 text from a file, or from stdin when the path is `-`.
pub fn read_text(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(Path::new(input))?)
    }
}
