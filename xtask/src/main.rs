use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use debrief::cli::Cli as DebriefCli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Workspace build tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate man pages into target/man
    Man,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Man => generate_man_pages(),
    }
}

fn generate_man_pages() -> Result<()> {
    let out_dir = man_dir();
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut cmd = DebriefCli::command();
    cmd.build();

    render_page(&out_dir, "debrief", cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let name = format!("debrief-{}", sub.get_name());
        render_page(&out_dir, &name, sub.clone().name(name.clone()))?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn render_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)
        .with_context(|| format!("Failed to render man page for {name}"))?;

    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn man_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("man")
}
