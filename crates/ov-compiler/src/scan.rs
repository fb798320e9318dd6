//! Line recognition for `.ov` scripts.
//!
//! There is no grammar here: a line is either a `print` statement or it is
//! ignored. Lines are raw bytes, so text in any encoding passes through
//! untouched. Matching is deliberately lenient and mirrors what the language
//! has always accepted.

/// Keyword plus the single space that must follow it.
pub const PRINT_PREFIX: &[u8] = b"print ";

const QUOTE: u8 = b'"';

/// Return the operand of a `print` line, or `None` if the line is not one.
///
/// Surrounding whitespace is trimmed first. The operand keeps everything after
/// the prefix, minus at most one quote at each end.
pub fn operand(line: &[u8]) -> Option<&[u8]> {
    trim_line(line).strip_prefix(PRINT_PREFIX).map(strip_quotes)
}

/// Strip at most one leading and one trailing `"` from `text`.
///
/// The quotes don't have to be paired: `"hello` and `hello"` both yield `hello`.
pub fn strip_quotes(text: &[u8]) -> &[u8] {
    let text = text.strip_prefix(&[QUOTE]).unwrap_or(text);
    text.strip_suffix(&[QUOTE]).unwrap_or(text)
}

/// Trim Unicode whitespace from UTF-8 lines, ASCII whitespace from anything else.
fn trim_line(line: &[u8]) -> &[u8] {
    match std::str::from_utf8(line) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => line.trim_ascii(),
    }
}
