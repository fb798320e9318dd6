//! Code generation module
//!
//! Emits C source for a `.ov` script. The output is a single `main` function
//! that prints each statement's text on its own line.

/// Fixed text preceding the generated statements.
pub const PROLOGUE: &str = "#include <stdio.h>\n\nint main() {\n";

/// Fixed text following the generated statements.
pub const EPILOGUE: &str = "    return 0;\n}\n";

/// C code generator
///
/// Owns the output buffer for one translation. Statements are appended in the
/// order they are emitted and the buffer is handed back by [`finish`].
///
/// [`finish`]: CodeGenerator::finish
#[derive(Debug)]
pub struct CodeGenerator {
    /// Output buffer. Bytes, since statement text is copied from the source as-is.
    output: Vec<u8>,
    /// Number of statements emitted so far
    statements: usize,
}

impl CodeGenerator {
    /// Create a new code generator, already holding the prologue
    pub fn new() -> Self {
        Self {
            output: PROLOGUE.as_bytes().to_vec(),
            statements: 0,
        }
    }

    /// Emit a `printf` call for `text` followed by a newline escape.
    ///
    /// The text is embedded verbatim. Quotes, backslashes and `%` are not
    /// escaped and end up in the C string literal as written.
    pub fn emit_print(&mut self, text: &[u8]) {
        self.output.extend_from_slice(b"    printf(\"");
        self.output.extend_from_slice(text);
        self.output.extend_from_slice(b"\\n\");\n");
        self.statements += 1;
    }

    pub fn statement_count(&self) -> usize {
        self.statements
    }

    /// Close `main` and return the complete program text
    pub fn finish(mut self) -> Vec<u8> {
        self.output.extend_from_slice(EPILOGUE.as_bytes());
        self.output
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
