use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use sgrline::cli::{Cli, Commands, ConfigCommand, RenderArgs};
use sgrline::terminal::escape;
use sgrline::{logging, Color, Config, Graphics, Line};

/// Width of each swatch printed by `colors`.
const SWATCH_WIDTH: usize = 24;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Render(args) => handle_render(&args, &config_path),
        Commands::Colors => handle_colors(&config_path),
        Commands::Config(cmd) => handle_config(cmd, &config_path),
    }
}

/// Honor https://no-color.org by dropping every escape sequence.
fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

fn emit(out: &mut impl Write, line: Line) -> io::Result<()> {
    let text = line.into_text();
    if no_color() {
        writeln!(out, "{}", escape::strip(&text))
    } else {
        writeln!(out, "{text}")
    }
}

fn handle_render(args: &RenderArgs, config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let default_graphics = config.default_graphics()?;
    let width = config.resolve_width(args.width);
    let fragment_graphics = args.graphics();
    tracing::debug!(width, raw = args.raw, "rendering");

    let render = |input: &str| {
        let mut line = Line::new(default_graphics.clone(), width);
        if args.raw {
            line.append_raw(input);
        } else {
            line.append(input, fragment_graphics.as_ref());
        }
        line
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.text.is_empty() {
        for input in io::stdin().lock().lines() {
            let input = input.context("Failed to read stdin")?;
            emit(&mut out, render(&input))?;
        }
    } else {
        for input in &args.text {
            emit(&mut out, render(input))?;
        }
    }
    Ok(())
}

fn handle_colors(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let default_graphics = config.default_graphics()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for color in Color::named() {
        let name = color.name().unwrap_or_default();
        let swatch = Graphics::new().with_bg(color);
        let label = Graphics::new().with_fg(color);

        let mut line = Line::new(default_graphics.clone(), SWATCH_WIDTH);
        line.append("  ", Some(&swatch))
            .append(" ", None)
            .append(&name, Some(&label));
        emit(&mut out, line)?;
    }
    Ok(())
}

fn handle_config(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = Config::load_from(config_path)?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Init => {
            if config_path.exists() {
                println!("Config already exists at {}", config_path.display());
            } else {
                Config::default().save_to(config_path)?;
                println!("Created {}", config_path.display());
            }
        }
    }
    Ok(())
}
