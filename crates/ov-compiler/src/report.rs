//! Summary of a finished compilation, for display.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::driver::CompileOutput;

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub statements: usize,
    pub bytes: usize,
}

impl From<&CompileOutput> for CompileReport {
    fn from(output: &CompileOutput) -> Self {
        Self {
            source: output.source_file.clone(),
            output: output.output_file.clone(),
            statements: output.statements,
            bytes: output.c_code.len(),
        }
    }
}

/// Renders the one-line success message.
impl fmt::Display for CompileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ Generated: {}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompileReport {
        CompileReport {
            source: PathBuf::from("hello.ov"),
            output: PathBuf::from("hello.c"),
            statements: 2,
            bytes: 97,
        }
    }

    #[test]
    fn test_success_line() {
        assert_eq!(sample().to_string(), "✅ Generated: hello.c");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "hello.ov",
                "output": "hello.c",
                "statements": 2,
                "bytes": 97,
            })
        );
    }
}
