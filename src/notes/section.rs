//! Section segmentation
//!
//! A notes document is split on heading lines: either the literal line
//! `Actions` or any line starting with two or more `#` followed by a space.
//! Every heading owns the text that follows it up to the next heading.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:Actions|#{2,} .*)$").expect("valid heading regex"));
static DATED_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^## \d{4}-\d{2}-\d{2}.*$").expect("valid dated heading regex"));

/// Kind of a section, decided from its heading text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Text before the first heading
    Preamble,
    /// `## YYYY-MM-DD ...` heading opening one meeting
    Dated,
    Present,
    Agenda,
    MeetingNotes,
    Actions,
    Other,
}

impl SectionKind {
    /// Classify a heading line. Rules are checked in order, first match wins.
    pub fn classify(heading: &str) -> Self {
        if DATED_HEADING_RE.is_match(heading.trim()) {
            SectionKind::Dated
        } else if heading.contains("### Present") {
            SectionKind::Present
        } else if heading.contains("### Agenda") {
            SectionKind::Agenda
        } else if heading.contains("### Meeting notes") {
            SectionKind::MeetingNotes
        } else if heading.contains("Action") {
            SectionKind::Actions
        } else {
            SectionKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Preamble => "preamble",
            SectionKind::Dated => "dated",
            SectionKind::Present => "present",
            SectionKind::Agenda => "agenda",
            SectionKind::MeetingNotes => "meeting_notes",
            SectionKind::Actions => "actions",
            SectionKind::Other => "other",
        }
    }

    /// Whether the formatter treats this kind as one of the named subsections
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            SectionKind::Present
                | SectionKind::Agenda
                | SectionKind::MeetingNotes
                | SectionKind::Actions
        )
    }
}

/// A heading and the body it owns, borrowed from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    /// Heading line without its line break (empty for the preamble)
    pub heading: &'a str,
    /// Everything after the heading up to the next heading, possibly empty
    pub body: &'a str,
    /// Line number of the heading (1-based)
    pub line: usize,
}

/// Split a document into sections, preserving source order.
///
/// Concatenating `heading` and `body` of every returned section gives back
/// the input document. An empty preamble is omitted.
pub fn split_sections(document: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut pending: Option<(&str, usize)> = None;
    let mut cursor = 0;
    let mut line = 1;
    let mut counted_to = 0;

    for heading in HEADING_RE.find_iter(document) {
        push_section(&mut sections, pending.take(), &document[cursor..heading.start()]);

        line += document[counted_to..heading.start()].matches('\n').count();
        counted_to = heading.start();

        pending = Some((heading.as_str(), line));
        cursor = heading.end();
    }
    push_section(&mut sections, pending, &document[cursor..]);

    sections
}

fn push_section<'a>(
    sections: &mut Vec<Section<'a>>,
    heading: Option<(&'a str, usize)>,
    body: &'a str,
) {
    match heading {
        Some((heading, line)) => sections.push(Section {
            kind: SectionKind::classify(heading),
            heading,
            body,
            line,
        }),
        None if !body.is_empty() => sections.push(Section {
            kind: SectionKind::Preamble,
            heading: "",
            body,
            line: 1,
        }),
        None => {}
    }
}
