use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use notes_formatter::error::Result;
use notes_formatter::{
    attendees, read_notes, FormatJob, FormatterOptions, NotesDigest, DEFAULT_INPUT,
    DEFAULT_OUTPUT,
};

#[derive(Parser)]
#[command(name = "notes-formatter")]
#[command(about = "Format markdown meeting notes for a Zulip post")]
#[command(version)]
#[command(after_long_help = r####"
EXAMPLES:
    # Format ./input.md into ./output.md
    notes-formatter

    # Format specific files
    notes-formatter --input notes/2024-11-08.md --output post.md

    # Print the formatted notes instead of writing a file
    notes-formatter --stdout

    # List the names that will become @** mentions
    notes-formatter mentions

    # Show the sections found in the notes
    notes-formatter outline --format json

Names under "### Present" are turned into @**name** mentions without checking
them against Zulip; verify them before posting.
"####)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the input markdown file
    #[arg(long, global = true, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path to the output markdown file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format the notes (default when no command is given)
    Format {
        /// Path to the output markdown file [default: output.md]
        #[arg(long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        args: FormatArgs,
    },

    /// List attendees that will be mentioned
    Mentions {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the sections of the notes
    Outline {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatArgs {
    /// Fail when a section heading ends the file without a body.
    /// Without this flag such a heading is formatted with an empty body
    #[arg(long)]
    pub strict: bool,

    /// Print the result instead of writing the output file
    #[arg(long)]
    pub stdout: bool,
}

impl FormatArgs {
    /// Combine flags given before and after the `format` subcommand
    pub fn merged_with(&self, other: &FormatArgs) -> FormatArgs {
        FormatArgs {
            strict: self.strict || other.strict,
            stdout: self.stdout || other.stdout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn format_notes(input: &Path, output: &Path, args: &FormatArgs) -> Result<()> {
    let job = FormatJob::new(input, output).with_options(FormatterOptions {
        strict: args.strict,
    });

    if args.stdout {
        print!("{}", job.render()?);
        return Ok(());
    }

    let report = job.run()?;
    println!(
        "Wrote {} ({} sections, {} bytes)",
        output.display(),
        report.sections,
        report.bytes_written
    );

    Ok(())
}

pub fn list_mentions(input: &Path, format: OutputFormat) -> Result<()> {
    let document = read_notes(input)?;
    println!("{}", render_mentions(input, &attendees(&document), format)?);
    Ok(())
}

pub fn show_outline(input: &Path, format: OutputFormat) -> Result<()> {
    let document = read_notes(input)?;
    let digest = NotesDigest::from_document(&document);
    println!("{}", render_outline(input, &digest, format)?);
    Ok(())
}

fn render_mentions(input: &Path, names: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
        OutputFormat::Text if names.is_empty() => {
            Ok(format!("No attendees found in {}", input.display()))
        }
        OutputFormat::Text => Ok(names
            .iter()
            .map(|name| format!("@**{}**", name))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_outline(input: &Path, digest: &NotesDigest, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(digest)?),
        OutputFormat::Text if digest.sections.is_empty() => {
            Ok(format!("No sections found in {}", input.display()))
        }
        OutputFormat::Text => Ok(digest
            .sections
            .iter()
            .map(|section| {
                format!(
                    "{:>4}  {:<13} {} ({} bullets)",
                    section.line,
                    section.kind.as_str(),
                    section.heading,
                    section.bullet_count
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
