// File: crates/demo/src/main.rs
// Summary: CLI that renders the gallery, saved series files, or CSV columns to PNG.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use plot_core::{color, read_series, Plot, RenderOptions, SampleSeries, TraceOutcome, TraceStyle};
use quickplot_demo::{gallery, load_xy_csv};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quickplot", version, about = "Render line plots to PNG")]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Directory PNGs are written to
    #[arg(long, global = true, default_value = "target/out")]
    out_dir: PathBuf,

    #[arg(long, global = true, default_value_t = plot_core::types::WIDTH)]
    width: i32,

    #[arg(long, global = true, default_value_t = plot_core::types::HEIGHT)]
    height: i32,

    /// Color theme (paper, dark)
    #[arg(long, global = true, default_value = "paper")]
    theme: String,

    /// Round the X axis outward as well as Y
    #[arg(long, global = true)]
    nice_x: bool,

    /// Skip tick labels
    #[arg(long, global = true)]
    no_labels: bool,
}

impl RenderArgs {
    fn options(&self) -> Result<RenderOptions> {
        if self.width <= 0 || self.height <= 0 {
            bail!("image size must be positive, got {}x{}", self.width, self.height);
        }
        Ok(RenderOptions {
            width: self.width,
            height: self.height,
            theme: color::find(&self.theme),
            draw_labels: !self.no_labels,
            nice_x: self.nice_x,
            ..RenderOptions::default()
        })
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every built-in demonstration plot
    Gallery,
    /// Plot a pair of series files written by `write_series`
    Series {
        x: PathBuf,
        y: PathBuf,
        /// Named palette color
        #[arg(long, default_value = "blue")]
        color: String,
        /// Mark every sample
        #[arg(long)]
        points: bool,
    },
    /// Plot two numeric columns of a CSV file
    Csv {
        file: PathBuf,
        #[arg(long, default_value_t = 0)]
        x_col: usize,
        #[arg(long, default_value_t = 1)]
        y_col: usize,
        /// First row is data, not a header
        #[arg(long)]
        no_header: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let options = cli.render.options()?;
    fs::create_dir_all(&cli.render.out_dir)
        .with_context(|| format!("creating {}", cli.render.out_dir.display()))?;

    match cli.command {
        Command::Gallery => {
            for fig in gallery() {
                let mut plot = fig.plot(options.clone());
                let out = cli.render.out_dir.join(format!("{}.png", fig.name));
                render(&mut plot, &out)?;
            }
        }
        Command::Series { x, y, color: name, points } => {
            let xs = load_series(&x)?;
            let ys = load_series(&y)?;
            let Some(rgb) = color::named(&name) else {
                bail!("unknown color '{name}'");
            };
            let mut plot = Plot::with_options(options);
            plot.add_trace(&xs, &ys, TraceStyle::colored(rgb).with_points(points));
            render(&mut plot, &cli.render.out_dir.join(out_name(&y)))?;
        }
        Command::Csv { file, x_col, y_col, no_header } => {
            let (xs, ys) = load_xy_csv(&file, x_col, y_col, !no_header)?;
            info!(rows = xs.len(), "loaded {}", file.display());
            let mut plot = Plot::with_options(options);
            plot.set_title(file.display().to_string());
            plot.add_trace(&xs, &ys, TraceStyle::default());
            render(&mut plot, &cli.render.out_dir.join(out_name(&file)))?;
        }
    }
    Ok(())
}

fn load_series(path: &Path) -> Result<SampleSeries> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_series(&mut BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

/// `<stem>.png` for an input file.
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "plot".into());
    PathBuf::from(format!("{stem}.png"))
}

fn render(plot: &mut Plot<'_>, out: &Path) -> Result<()> {
    let report = plot.render_to_png(out).with_context(|| format!("rendering {}", out.display()))?;
    match &report.layout {
        Some(layout) => info!(
            x_min = layout.x.range.min,
            x_max = layout.x.range.max,
            y_min = layout.y.range.min,
            y_max = layout.y.range.max,
            x_divs = layout.x.divisions,
            y_divs = layout.y.divisions,
            "wrote {}",
            out.display()
        ),
        None => warn!("nothing to plot; wrote empty frame to {}", out.display()),
    }
    for (i, outcome) in report.outcomes.iter().enumerate() {
        if let TraceOutcome::Skipped(reason) = outcome {
            warn!(trace = i, ?reason, "trace not drawn");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["quickplot", "csv", "data.csv", "--no-header", "--width", "320", "--nice-x"])
            .expect("parse");
        assert_eq!(cli.render.width, 320);
        assert!(cli.render.nice_x);
        match cli.command {
            Command::Csv { no_header, x_col, y_col, .. } => {
                assert!(no_header);
                assert_eq!((x_col, y_col), (0, 1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bad_size_is_rejected() {
        let cli = Cli::try_parse_from(["quickplot", "--height", "0", "gallery"]).expect("parse");
        assert!(cli.render.options().is_err());
    }

    #[test]
    fn out_name_uses_stem() {
        assert_eq!(out_name(Path::new("dir/wave.txt")), PathBuf::from("wave.png"));
    }
}
