pub mod error;
pub mod job;
pub mod notes;

pub use error::{FormatError, Result};
pub use job::{read_notes, FormatJob, FormatReport, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use notes::{
    attendees, split_sections, FormatterOptions, NoteFormatter, NotesDigest, Section, SectionKind,
    SectionSummary,
};
