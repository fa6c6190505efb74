//! Zulip formatting of meeting notes
//!
//! Each section is rendered according to its kind and the rendered pieces are
//! joined with single line breaks.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::bullets;
use super::section::{split_sections, Section, SectionKind};
use crate::error::{FormatError, Result};

/// `- <name>` in a Present section, at any nesting depth
pub(crate) static ATTENDEE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"- (.*)").expect("valid attendee regex"));

const TOPIC_BREAK: &str = "\n- ";

/// Turn every attendee line into a Zulip mention.
///
/// Names are not checked against real Zulip handles, that is left to whoever
/// posts the notes.
pub fn format_present(body: &str) -> String {
    ATTENDEE_RE
        .replace_all(body.trim(), "- @**${1}**")
        .into_owned()
}

pub fn format_agenda(body: &str) -> String {
    bullets::reindent(body)
}

/// Wrap every top-level topic in a spoiler block titled after the topic.
pub fn format_meeting_notes(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    split_topics(body)
        .into_iter()
        .map(render_topic)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Split before every line that starts with `- `, dropping the line break.
fn split_topics(body: &str) -> Vec<&str> {
    let mut topics = Vec::new();
    let mut start = 0;
    for (idx, _) in body.match_indices(TOPIC_BREAK) {
        topics.push(&body[start..idx]);
        start = idx + 1;
    }
    topics.push(&body[start..]);
    topics
}

fn render_topic(topic: &str) -> String {
    match topic
        .strip_prefix("- ")
        .and_then(|rest| rest.split_once('\n'))
    {
        Some((title, rest)) => {
            format!("```spoiler {}\n{}\n```", title, bullets::reindent(rest))
        }
        // no `- <title>` line to build a spoiler from
        None => topic.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Reject a named section heading that ends the document without a body
    pub strict: bool,
}

/// Formats a whole notes document
#[derive(Debug, Clone, Default)]
pub struct NoteFormatter {
    options: FormatterOptions,
}

impl NoteFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn format(&self, document: &str) -> Result<String> {
        let sections = split_sections(document);
        if self.options.strict {
            check_structure(&sections)?;
        }

        let mut pieces: Vec<Cow<'_, str>> = Vec::with_capacity(sections.len() * 2);
        for section in &sections {
            debug!(kind = section.kind.as_str(), line = section.line, "Formatting section");
            render_section(section, &mut pieces);
        }

        debug!(sections = sections.len(), "Formatted notes");
        Ok(pieces.join("\n"))
    }
}

fn render_section<'a>(section: &Section<'a>, pieces: &mut Vec<Cow<'a, str>>) {
    match section.kind {
        SectionKind::Dated => {
            pieces.push(section.heading.into());
            pieces.push("\n\n".into());
            if !section.body.trim().is_empty() {
                pieces.push(section.body.into());
            }
        }
        SectionKind::Present => {
            pieces.push(section.heading.into());
            pieces.push(format_present(section.body).into());
            pieces.push("\n".into());
        }
        SectionKind::Agenda => {
            pieces.push(section.heading.into());
            pieces.push(format_agenda(section.body).into());
        }
        SectionKind::MeetingNotes => {
            pieces.push(section.heading.into());
            pieces.push(format_meeting_notes(section.body).into());
        }
        SectionKind::Preamble | SectionKind::Actions | SectionKind::Other => {
            pieces.push(format!("{}{}", section.heading, section.body).into());
        }
    }
}

fn check_structure(sections: &[Section<'_>]) -> Result<()> {
    match sections.last() {
        Some(last) if last.kind.is_named() && last.body.is_empty() => {
            Err(FormatError::MissingSectionBody {
                heading: last.heading.to_string(),
                line: last.line,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_names_become_mentions() {
        assert_eq!(
            format_present("- Alice Smith\n- Bob Lee"),
            "- @**Alice Smith**\n- @**Bob Lee**"
        );
    }

    #[test]
    fn test_present_trims_and_keeps_other_lines() {
        assert_eq!(
            format_present("\n\nApologies:\n- Carol\n\n"),
            "Apologies:\n- @**Carol**"
        );
    }

    #[test]
    fn test_present_nested_names_become_mentions() {
        assert_eq!(
            format_present("- Core team\n    - Alice\n    - Bob\n"),
            "- @**Core team**\n    - @**Alice**\n    - @**Bob**"
        );
    }

    #[test]
    fn test_meeting_notes_become_spoilers() {
        let body = "- Topic A\n  - point one\n- Topic B\n  - point two";
        assert_eq!(
            format_meeting_notes(body),
            "```spoiler Topic A\n- point one\n```\n\n```spoiler Topic B\n- point two\n```"
        );
    }

    #[test]
    fn test_meeting_notes_nested_bullets() {
        let body = "- Release\n    - tag on Friday\n        - after CI passes";
        assert_eq!(
            format_meeting_notes(body),
            "```spoiler Release\n- tag on Friday\n  - after CI passes\n```"
        );
    }

    #[test]
    fn test_meeting_notes_without_title_line_pass_through() {
        // a final topic with no body has no line break after its title
        let body = "intro\n- Topic A\n    - point\n- Lone topic";
        assert_eq!(
            format_meeting_notes(body),
            "intro\n\n```spoiler Topic A\n- point\n```\n\n- Lone topic"
        );
    }

    #[test]
    fn test_empty_bodies_do_not_fail() {
        assert_eq!(format_present("  \n"), "");
        assert_eq!(format_agenda("\n\n"), "");
        assert_eq!(format_meeting_notes(" \n "), "");
    }

    #[test]
    fn test_unrecognized_sections_pass_through() {
        let doc = "## Housekeeping\nkeep   this\n    exactly\n";
        let out = NoteFormatter::default().format(doc).unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_actions_are_verbatim() {
        let doc = "Actions\n- Alice:   update docs\n        - weird indent\n";
        let out = NoteFormatter::default().format(doc).unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_dated_heading_gets_blank_line() {
        let out = NoteFormatter::default()
            .format("## 2024-11-08 Community call\n### Present\n- Alice\n")
            .unwrap();
        assert_eq!(out, "## 2024-11-08 Community call\n\n\n\n### Present\n- @**Alice**\n\n");
    }

    #[test]
    fn test_full_document() {
        let doc = "## 2024-11-08 Community call\n\n### Present\n\n- Alice\n- Bob\n\n### Agenda\n\n- Release\n    - date\n\n### Meeting notes\n\n- Release\n    - tag on Friday\n\nActions\n- Alice to tag\n";
        let out = NoteFormatter::default().format(doc).unwrap();
        let expected = concat!(
            "## 2024-11-08 Community call\n\n\n\n",
            "### Present\n- @**Alice**\n- @**Bob**\n\n\n",
            "### Agenda\n\n\n- Release\n  - date\n\n",
            "### Meeting notes\n\n\n\n```spoiler Release\n- tag on Friday\n\n```\n",
            "Actions\n- Alice to tag\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_lenient_heading_at_end() {
        let out = NoteFormatter::default().format("### Agenda").unwrap();
        assert_eq!(out, "### Agenda\n");
    }

    #[test]
    fn test_strict_rejects_heading_at_end() {
        let formatter = NoteFormatter::new(FormatterOptions { strict: true });
        let err = formatter.format("### Present\n- A\n### Agenda").unwrap_err();
        match err {
            FormatError::MissingSectionBody { heading, line } => {
                assert_eq!(heading, "### Agenda");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_accepts_unnamed_heading_at_end() {
        let formatter = NoteFormatter::new(FormatterOptions { strict: true });
        assert!(formatter.format("### Agenda\n- a\n## Misc").is_ok());
    }
}
