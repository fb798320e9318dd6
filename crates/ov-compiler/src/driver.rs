//! Compiler driver
//!
//! Ties the pieces together: open the source, scan it line by line, generate
//! C code, and write the result next to the source.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::codegen::CodeGenerator;
use crate::error::{CompileError, Result};
use crate::scan;

/// Extension recognized on source files.
pub const SOURCE_SUFFIX: &str = ".ov";

/// Extension given to generated files.
pub const TARGET_SUFFIX: &str = ".c";

/// Permission bits for a newly created C file.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Derive the C file path for a source path.
///
/// A trailing `.ov` is replaced with `.c`. Any other name gets `.c` appended
/// as-is, so `notes.txt` becomes `notes.txt.c`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut output: OsString = match input.to_str().and_then(|s| s.strip_suffix(SOURCE_SUFFIX)) {
        Some(stem) => stem.into(),
        None => input.as_os_str().to_owned(),
    };
    output.push(TARGET_SUFFIX);
    PathBuf::from(output)
}

/// Options for a single compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Source file to translate
    pub input: PathBuf,
    /// Where to write the C file. Derived from `input` when unset.
    pub output: Option<PathBuf>,
}

impl CompileOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// The path the C file will be written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| output_path_for(&self.input))
    }
}

/// Result of a successful compilation, not yet written to disk
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// The source file that was compiled
    pub source_file: PathBuf,
    /// Where [`CompileOutput::write`] puts the C code
    pub output_file: PathBuf,
    /// Generated C program. Statement text keeps the source's bytes.
    pub c_code: Vec<u8>,
    /// Number of `print` statements translated
    pub statements: usize,
}

impl CompileOutput {
    /// Write the C code to `output_file`, creating or truncating it.
    pub fn write(&self) -> Result<()> {
        write_c_file(&self.output_file, &self.c_code).map_err(|source| CompileError::Write {
            path: self.output_file.clone(),
            source,
        })?;
        info!(
            path = %self.output_file.display(),
            bytes = self.c_code.len(),
            "wrote C file"
        );
        Ok(())
    }
}

/// The `.ov` compiler
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Translate the source file named in the options.
    ///
    /// Nothing is written to disk; call [`CompileOutput::write`] for that.
    pub fn compile(&self) -> Result<CompileOutput> {
        let input = &self.options.input;
        let file = open_source(input).map_err(|source| CompileError::Open {
            path: input.clone(),
            source,
        })?;
        debug!(path = %input.display(), "opened source");

        self.compile_reader(BufReader::new(file))
    }

    /// Translate a script from any buffered reader.
    ///
    /// Lines are split on `\n` and never decoded, so any encoding is accepted.
    /// I/O failures are reported against the configured input path.
    pub fn compile_reader<R: BufRead>(&self, reader: R) -> Result<CompileOutput> {
        let mut codegen = CodeGenerator::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|source| CompileError::Read {
                path: self.options.input.clone(),
                source,
            })?;

            if let Some(text) = scan::operand(&line) {
                debug!(line = index + 1, text = %String::from_utf8_lossy(text), "print");
                codegen.emit_print(text);
            }
        }

        let statements = codegen.statement_count();
        Ok(CompileOutput {
            source_file: self.options.input.clone(),
            output_file: self.options.output_path(),
            c_code: codegen.finish(),
            statements,
        })
    }
}

/// Translate `input` and write the C file next to it.
///
/// Returns the path of the generated file.
pub fn translate(input: impl AsRef<Path>) -> Result<PathBuf> {
    let output = Compiler::new(CompileOptions::new(input.as_ref())).compile()?;
    output.write()?;
    Ok(output.output_file)
}

/// Open a source file for reading, refusing directories up front.
fn open_source(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::IsADirectory, "is a directory"));
    }
    Ok(file)
}

fn write_c_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}
