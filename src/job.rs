//! Formatting a notes file into an output file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{FormatError, Result};
use crate::notes::{split_sections, FormatterOptions, NoteFormatter};

pub const DEFAULT_INPUT: &str = "input.md";
pub const DEFAULT_OUTPUT: &str = "output.md";

/// Input and output locations plus formatter options for one run
#[derive(Debug, Clone)]
pub struct FormatJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: FormatterOptions,
}

impl Default for FormatJob {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatReport {
    pub sections: usize,
    pub bytes_written: usize,
}

impl FormatJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: FormatterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FormatterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn read_input(&self) -> Result<String> {
        read_notes(&self.input)
    }

    /// Read and format the input without writing anything
    pub fn render(&self) -> Result<String> {
        let document = self.read_input()?;
        NoteFormatter::new(self.options).format(&document)
    }

    /// Read, format and replace the output file.
    ///
    /// The output is written to a temporary file in the same directory and
    /// persisted over the destination, so a failed run leaves no partial
    /// output behind.
    pub fn run(&self) -> Result<FormatReport> {
        let document = self.read_input()?;
        let sections = split_sections(&document).len();
        let formatted = NoteFormatter::new(self.options).format(&document)?;

        write_replacing(&self.output, &formatted)?;

        info!(
            input = %self.input.display(),
            output = %self.output.display(),
            sections,
            "Formatted meeting notes"
        );

        Ok(FormatReport {
            sections,
            bytes_written: formatted.len(),
        })
    }
}

/// Read a notes file, mapping a missing file and bad UTF-8 to their own errors.
///
/// `\r\n` line endings are turned into `\n`.
pub fn read_notes(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FormatError::InputNotFound(path.to_path_buf()),
        ErrorKind::InvalidData => FormatError::Encoding(path.to_path_buf()),
        _ => FormatError::Io(e),
    })?;

    if contents.contains("\r\n") {
        debug!(path = %path.display(), "Normalizing CRLF line endings");
        return Ok(contents.replace("\r\n", "\n"));
    }
    Ok(contents)
}

fn write_replacing(path: &Path, contents: &str) -> Result<()> {
    let dir = output_dir(path);
    let mut temp = NamedTempFile::new_in(dir)?;
    debug!(path = %temp.path().display(), "Writing temporary output");

    temp.write_all(contents.as_bytes())?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

fn output_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}
