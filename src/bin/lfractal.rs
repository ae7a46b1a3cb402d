//! Command-line front end: load grammar files, render one system, report or dump it.

use anyhow::{Context, bail};
use clap::Parser;
use glam::Vec2;
use lsystem_turtle::{Canvas, Drawing, LSystem, TurtleConfig, loader};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(version, about = "Render L-System fractal curves")]
struct Args {
    /// Grammar files to load. Defaults to every `*.l` file in the current directory.
    files: Vec<PathBuf>,

    /// System to render, by title or zero-based index.
    #[arg(short, long, default_value = "0")]
    system: String,

    /// Number of rewriting steps. Defaults to the system's own order.
    #[arg(short, long)]
    order: Option<i64>,

    /// Turn steps per full circle. Defaults to the grammar's ANGLE.
    #[arg(short, long)]
    angle: Option<i64>,

    #[arg(long, default_value_t = 640.0)]
    width: f32,

    #[arg(long, default_value_t = 480.0)]
    height: f32,

    /// Write the rendered segments as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// List the loaded systems and exit.
    #[arg(long)]
    list: bool,
}

fn grammar_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "l") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn select(mut systems: Vec<LSystem>, key: &str) -> anyhow::Result<LSystem> {
    let index = match key.parse::<usize>() {
        Ok(index) if index < systems.len() => index,
        _ => match systems.iter().position(|s| s.title.eq_ignore_ascii_case(key)) {
            Some(index) => index,
            None => bail!("no l-system matching {key:?} ({} loaded)", systems.len()),
        },
    };
    Ok(systems.swap_remove(index))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let files = if args.files.is_empty() {
        grammar_files(Path::new("."))?
    } else {
        args.files
    };
    log::info!("grammar files: {files:?}");

    let systems = loader::load(files.as_slice()).context("loading grammar files")?;
    if args.list {
        for (index, system) in systems.iter().enumerate() {
            println!("{index}: {}", system.title);
        }
        return Ok(());
    }

    let mut canvas = Canvas::new(select(systems, &args.system)?, TurtleConfig::default());
    if let Some(order) = args.order {
        canvas.set_order(order);
    }
    if let Some(angle) = args.angle {
        canvas.set_angle(angle);
    }

    let mut drawing = Drawing::new();
    canvas.render(Vec2::new(args.width, args.height), &mut drawing)?;
    log::info!("{}", canvas.caption()?);
    println!("{} segments", drawing.segments.len());

    if let Some(path) = args.json {
        let json = serde_json::to_string_pretty(&drawing)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
