//! Development tasks: `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for sgrline and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man(&out),
    }
}

fn generate_man(out: &std::path::Path) -> Result<()> {
    fs::create_dir_all(out)?;
    let cmd = sgrline::cli::Cli::command();
    clap_mangen::generate_to(cmd, out)?;
    println!("Man pages written to {}", out.display());
    Ok(())
}
