mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_formatter=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            cli::format_notes(&cli.input, &cli.output, &cli.format)?;
        }
        Some(Commands::Format { output, args }) => {
            let output = output.as_deref().unwrap_or(cli.output.as_path());
            cli::format_notes(&cli.input, output, &args.merged_with(&cli.format))?;
        }
        Some(Commands::Mentions { format }) => {
            cli::list_mentions(&cli.input, format)?;
        }
        Some(Commands::Outline { format }) => {
            cli::show_outline(&cli.input, format)?;
        }
    }

    Ok(())
}
