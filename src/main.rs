use anyhow::Result;
use clap::Parser;

use debrief::cli::{Cli, Commands};
use debrief::logging::init_tracing;
use debrief::Config;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_tracing(&config.logging, cli.log_level.as_deref());

    match cli.command {
        Commands::Show { file, format } => commands::show::handle(&file, format),
        Commands::Info { file } => commands::info::handle(&file),
        Commands::At { file, seconds } => commands::at::handle(&file, seconds),
        Commands::Excerpt { file, from, to } => commands::excerpt::handle(&file, from, to),
        Commands::Compile { notes, output } => {
            commands::compile::handle(&notes, output.as_deref())
        }
        Commands::Transform { notes, prompt } => {
            commands::transform::handle(&config, &notes, &prompt)
        }
        Commands::Tag { text, timestamp } => {
            commands::tag::handle(&config, &text, timestamp.as_deref())
        }
        Commands::Config { action } => commands::config::handle(action),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
