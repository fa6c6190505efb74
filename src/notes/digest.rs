//! Outline of a notes document and the attendees it mentions.

use serde::Serialize;

use super::bullets;
use super::formatter::ATTENDEE_RE;
use super::section::{split_sections, SectionKind};

/// One section of the document
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub heading: String,
    /// Line number of the heading (1-based)
    pub line: usize,
    pub bullet_count: usize,
}

/// Parsed notes digest
#[derive(Debug, Clone, Serialize)]
pub struct NotesDigest {
    pub sections: Vec<SectionSummary>,
    /// Names that become `@**name**` mentions, in order of appearance
    pub attendees: Vec<String>,
}

impl NotesDigest {
    pub fn from_document(document: &str) -> Self {
        let sections = split_sections(document)
            .into_iter()
            .map(|section| SectionSummary {
                kind: section.kind,
                heading: section.heading.to_string(),
                line: section.line,
                bullet_count: bullets::count_bullets(section.body),
            })
            .collect();

        Self {
            sections,
            attendees: attendees(document),
        }
    }
}

/// Names listed under every Present heading, without duplicates
pub fn attendees(document: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for section in split_sections(document) {
        if section.kind != SectionKind::Present {
            continue;
        }
        for caps in ATTENDEE_RE.captures_iter(section.body.trim()) {
            let name = caps[1].trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }

    names
}
