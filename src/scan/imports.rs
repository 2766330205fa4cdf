//! Import extraction from gofmt-formatted Go source.
//!
//! This is a line-oriented heuristic, not a parser. It recognizes the two
//! canonical import forms:
//!
//! ```text
//! import "fmt"
//! import (
//!     "os"
//!     str "strings"
//! )
//! ```
//!
//! Imports are expected near the top of a file. Scanning stops once
//! [`UNINFORMATIVE_LIMIT`] lines in total have been blank or matched
//! neither import form, or at end of input.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::ScanError;
use crate::core::source::SourceFile;

/// Number of uninformative lines after which a file is considered done.
pub const UNINFORMATIVE_LIMIT: usize = 5;

/// `import "path"` or `import alias "path"`, with any amount of spacing.
static SINGLE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+(?:(?:[\p{L}_][\p{L}\p{N}_]*|\.)\s+)?["`]"#)
        .expect("single import pattern is valid")
});

/// `import (`, with any amount of spacing.
static BLOCK_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bimport\s*\(").expect("block import pattern is valid"));

/// Extract the import paths declared by `file`, in declaration order.
///
/// Reading continues from wherever the file cursor currently is, so the
/// package line is expected to have been consumed already.
pub fn extract_imports<R: BufRead>(file: &mut SourceFile<R>) -> Result<Vec<String>, ScanError> {
    let mut imports = Vec::new();
    let mut uninformative = 0;

    while let Some(line) = file.next_line()? {
        if line.trim().is_empty() {
            uninformative += 1;
        } else if let Some(m) = SINGLE_IMPORT.find(&line) {
            // The match ends just past the opening quote.
            let quoted = &line[m.end() - 1..];
            imports.push(unquote_prefix(quoted).ok_or_else(|| malformed(file, &line))?);
        } else if let Some(m) = BLOCK_IMPORT.find(&line) {
            if line[m.end()..].trim() != ")" {
                read_import_block(file, &mut imports)?;
            }
        } else {
            uninformative += 1;
        }

        if uninformative >= UNINFORMATIVE_LIMIT {
            tracing::debug!(
                "{}: no imports expected past line {}",
                file.path().display(),
                file.line_number()
            );
            break;
        }
    }

    Ok(imports)
}

/// Read the body of an `import (` block up to its closing `)`.
///
/// Running out of input inside a block ends the block.
fn read_import_block<R: BufRead>(
    file: &mut SourceFile<R>,
    imports: &mut Vec<String>,
) -> Result<(), ScanError> {
    while let Some(line) = file.next_line()? {
        let code = strip_line_comment(&line).trim();
        if code == ")" {
            return Ok(());
        }
        if code.is_empty() {
            continue;
        }

        let fields: Vec<&str> = code.split_whitespace().collect();
        let token = if fields.len() == 2 { fields[1] } else { fields[0] };
        let path = unquote(token).ok_or_else(|| malformed(file, &line))?;
        imports.push(path);
    }
    Ok(())
}

/// Drop a trailing `// comment`, ignoring `//` inside a quoted path.
fn strip_line_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'"' | b'`' => in_quotes = !in_quotes,
            b'/' if !in_quotes && bytes.get(i + 1) == Some(&b'/') => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Remove the surrounding quotes from a whole token.
fn unquote(token: &str) -> Option<String> {
    let quote = token.chars().next().filter(|c| *c == '"' || *c == '`')?;
    let inner = token[1..].strip_suffix(quote)?;
    non_empty_path(inner)
}

/// Take the first quoted string at the start of `s`, ignoring what follows it.
fn unquote_prefix(s: &str) -> Option<String> {
    let quote = s.chars().next().filter(|c| *c == '"' || *c == '`')?;
    let rest = &s[1..];
    let end = rest.find(quote)?;
    non_empty_path(&rest[..end])
}

fn non_empty_path(inner: &str) -> Option<String> {
    if inner.is_empty() || inner.contains(|c: char| c.is_whitespace()) {
        None
    } else {
        Some(inner.to_string())
    }
}

fn malformed<R: BufRead>(file: &SourceFile<R>, line: &str) -> ScanError {
    ScanError::MalformedImportLine {
        path: file.path().to_path_buf(),
        line_number: file.line_number(),
        line: line.to_string(),
    }
}
