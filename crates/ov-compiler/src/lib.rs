/// `.ov` compiler
///
/// Translates `.ov` print scripts into C source files.
/// A script is read one line at a time; every `print "..."` line becomes a
/// `printf` call inside a fixed `main` function.

pub mod scan;
pub mod codegen;
pub mod driver;
pub mod error;
pub mod report;

pub use codegen::CodeGenerator;
pub use driver::{output_path_for, translate, CompileOptions, CompileOutput, Compiler};
pub use error::{CompileError, Result};
pub use report::CompileReport;
