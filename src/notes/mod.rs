//! Meeting notes reformatting
//!
//! Turns markdown meeting notes into text that renders well as a Zulip post:
//! attendee names become mentions, nested bullets use two-space indentation
//! and each meeting-notes topic is collapsed into a spoiler block.

pub mod bullets;
pub mod digest;
pub mod formatter;
pub mod section;

pub use digest::{attendees, NotesDigest, SectionSummary};
pub use formatter::{
    format_agenda, format_meeting_notes, format_present, FormatterOptions, NoteFormatter,
};
pub use section::{split_sections, Section, SectionKind};
