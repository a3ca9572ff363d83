// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hyperlinker - command line host for the hyperlink geometry engine.
//!
//! Creates, inspects, converts and hit-tests hyperlink files without a GUI.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use hyperlinker::io::serialization::{load_links, save_links};
use hyperlinker::util::canvas::{self, CanvasSize};
use hyperlinker::{
    EngineConfig, Hyperlink, HyperlinkSet, Keyframe, Keyframes, Point, Polygon, VideoRef,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "hyperlinker", version, about = "Video hyperlink geometry tool")]
struct Cli {
    /// Configuration file (.yaml, .yml or .json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the hyperlinks in a file.
    Info {
        file: PathBuf,
    },
    /// Add a hyperlink to a file, creating the file if needed.
    Create(CreateArgs),
    /// Print a hyperlink's vertices on one frame.
    Geometry {
        file: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long)]
        frame: i32,
    },
    /// Report which hyperlink a click on a frame follows.
    Hit(HitArgs),
    /// Rewrite a file in the current layout (JSON or YAML by extension).
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
    /// Rescale every hyperlink from the reference canvas to a display canvas.
    Scale {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },
}

#[derive(Parser, Debug)]
struct CreateArgs {
    file: PathBuf,
    #[arg(long)]
    name: String,
    #[arg(long)]
    start: i32,
    #[arg(long)]
    end: i32,
    #[arg(long, default_value = "")]
    from_video: String,
    #[arg(long)]
    to_video: String,
    #[arg(long, default_value_t = 0)]
    to_frame: i32,
    /// Start keyframe as "x0,y0,x1,y1,...". Defaults to the configured box.
    #[arg(long)]
    start_points: Option<String>,
    /// End keyframe as "x0,y0,x1,y1,...". Defaults to the start keyframe.
    #[arg(long)]
    end_points: Option<String>,
}

#[derive(Parser, Debug)]
struct HitArgs {
    file: PathBuf,
    #[arg(long)]
    frame: i32,
    #[arg(long)]
    x: f64,
    #[arg(long)]
    y: f64,
    /// Size of the canvas the click was made on, as "WIDTHxHEIGHT".
    #[arg(long)]
    display: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.cmd {
        Command::Info { file } => info(&config.resolve(&file)),
        Command::Create(args) => create(&config, args),
        Command::Geometry { file, name, frame } => geometry(&config.resolve(&file), &name, frame),
        Command::Hit(args) => hit(&config, args),
        Command::Convert { input, output } => {
            let links = load_links(&config.resolve(&input))?;
            save_links(&links, &config.resolve(&output))
        }
        Command::Scale {
            input,
            output,
            width,
            height,
        } => {
            let mut set = load_set(&config.resolve(&input))?;
            let factor = canvas::scale_factor(config.reference_canvas, CanvasSize::new(width, height));
            set.scale_vertices(factor);
            println!("Scaled {} hyperlinks by {:.4}", set.len(), factor);
            save_links(set.as_slice(), &config.resolve(&output))
        }
    }
}

fn load_set(path: &Path) -> Result<HyperlinkSet> {
    let links = load_links(path)?;
    Ok(HyperlinkSet::from_links(links)?)
}

fn parse_points(text: &str) -> Result<Polygon> {
    let coords = text
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid coordinate list {text:?}"))?;
    Ok(Polygon::from_flat(&coords)?)
}

fn parse_canvas(text: &str) -> Result<CanvasSize> {
    let (w, h) = text
        .split_once('x')
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got {text:?}"))?;
    Ok(CanvasSize::new(w.trim().parse()?, h.trim().parse()?))
}

fn info(path: &Path) -> Result<()> {
    let set = load_set(path)?;
    if set.is_empty() {
        println!("No hyperlinks in {}", path.display());
    }
    for link in set.iter() {
        println!(
            "{}: frames {}..={} of {:?}, {} vertices -> {:?} frame {}",
            link.name(),
            link.start_frame(),
            link.end_frame(),
            link.from_video().as_str(),
            link.vertex_count(),
            link.to_video().as_str(),
            link.to_frame()
        );
    }
    Ok(())
}

fn create(config: &EngineConfig, args: CreateArgs) -> Result<()> {
    let path = config.resolve(&args.file);
    let mut set = if path.exists() {
        load_set(&path)?
    } else {
        HyperlinkSet::new()
    };

    let start = match &args.start_points {
        Some(text) => parse_points(text)?,
        None => config.default_polygon(),
    };
    let end = match &args.end_points {
        Some(text) => parse_points(text)?,
        None => start.clone(),
    };

    let link = Hyperlink::new(
        args.name,
        args.start,
        args.end,
        VideoRef::from(args.from_video),
        VideoRef::from(args.to_video),
        args.to_frame,
        Keyframes { start, end },
    )?;
    let on_canvas = [Keyframe::Start, Keyframe::End]
        .iter()
        .all(|&k| link.keyframe(k).fits_within(config.reference_canvas));
    if !on_canvas {
        log::warn!("Hyperlink {:?} extends past the reference canvas", link.name());
    }

    println!("Created {:?} on frames {}..={}", link.name(), link.start_frame(), link.end_frame());
    set.insert(link)?;
    save_links(set.as_slice(), &path)
}

fn geometry(path: &Path, name: &str, frame: i32) -> Result<()> {
    let set = load_set(path)?;
    let link = set
        .get(name)
        .ok_or_else(|| anyhow!("no hyperlink named {name:?} in {}", path.display()))?;
    match link.geometry_at(frame) {
        Some(g) => {
            for (i, p) in g.polygon.vertices().iter().enumerate() {
                println!("{i}: ({:.3}, {:.3})", p.x, p.y);
            }
        }
        None => println!(
            "{name:?} is not shown on frame {frame} (frames {}..={})",
            link.start_frame(),
            link.end_frame()
        ),
    }
    Ok(())
}

fn hit(config: &EngineConfig, args: HitArgs) -> Result<()> {
    let set = load_set(&config.resolve(&args.file))?;
    let mut point = Point::new(args.x, args.y);
    if let Some(display) = &args.display {
        point = canvas::to_reference(point, parse_canvas(display)?, config.reference_canvas);
    }

    match set.navigate(args.frame, point) {
        Some(nav) => println!("{} -> {} frame {}", nav.link, nav.video, nav.frame),
        None => println!("No hyperlink at ({:.1}, {:.1}) on frame {}", point.x, point.y, args.frame),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        let polygon = parse_points("0, 0, 10,0, 5,8").unwrap();
        assert_eq!(polygon.len(), 3);
        assert_eq!(polygon.vertices()[2], Point::new(5.0, 8.0));
        assert!(parse_points("0,0,1").is_err());
        assert!(parse_points("0,zero").is_err());
    }

    #[test]
    fn test_parse_canvas() {
        assert_eq!(parse_canvas("704x576").unwrap(), CanvasSize::new(704.0, 576.0));
        assert!(parse_canvas("704").is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "hyperlinker",
            "hit",
            "links.json",
            "--frame",
            "3",
            "--x",
            "10",
            "--y",
            "12.5",
            "--display",
            "704x576",
        ])
        .unwrap();
        assert!(matches!(cli.cmd, Command::Hit(HitArgs { frame: 3, .. })));
    }
}
