mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use report_paginate::IntervalSource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpag", about = "Report pagination CLI", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a rendered report image to a multi-page PDF
    Export {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "stats_only")]
        output: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Show pagination statistics without writing a PDF
    Stats {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Write the default export options to a JSON file
    InitConfig {
        /// Where to write the options
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Inputs and layout settings shared by `export` and `stats`
#[derive(Args)]
struct LayoutArgs {
    /// Rendered report image (PNG or JPEG)
    #[arg(short, long)]
    image: PathBuf,

    /// Measured boundaries (JSON) of sections and rows that should not be split
    #[arg(short, long)]
    boundaries: Option<PathBuf>,

    /// Export options (JSON); flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Page margin in mm (uniform on all sides)
    #[arg(long)]
    margin: Option<f32>,

    /// How far past the page limit (pt) a safe boundary may still be used
    #[arg(long)]
    tolerance: Option<f32>,

    /// Shrink the whole report onto one page instead of paginating
    #[arg(long)]
    fit_one_page: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for report_paginate::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for report_paginate::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

/// A loaded report ready to lay out
struct Prepared {
    raster: image::RgbImage,
    intervals: Vec<report_paginate::Interval>,
    options: report_paginate::ExportOptions,
}

impl LayoutArgs {
    /// Load options, raster and boundaries; flags override the config file.
    async fn prepare(self, title: Option<String>) -> Result<Prepared> {
        let mut options = match &self.config {
            Some(path) => report_paginate::ExportOptions::load(path)
                .await
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => report_paginate::ExportOptions::default(),
        };
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(margin) = self.margin {
            options.margin_mm = margin;
        }
        if let Some(tolerance) = self.tolerance {
            options.snap_tolerance_pt = tolerance;
        }
        if self.fit_one_page {
            options.mode = report_paginate::ExportMode::FitToOnePage;
        }
        if title.is_some() {
            options.title = title;
        }
        options.validate()?;

        let raster = report_paginate::load_raster(&self.image)
            .await
            .with_context(|| format!("loading image {}", self.image.display()))?;

        let snapshot = match &self.boundaries {
            Some(path) => report_paginate::LayoutSnapshot::load(path)
                .await
                .with_context(|| format!("loading boundaries from {}", path.display()))?,
            None => report_paginate::LayoutSnapshot::default(),
        };
        snapshot.check_against(&source_buffer(&raster))?;

        Ok(Prepared {
            intervals: snapshot.intervals(),
            raster,
            options,
        })
    }
}

fn source_buffer(raster: &image::RgbImage) -> report_paginate::SourceBuffer {
    report_paginate::SourceBuffer::new(raster.width() as f32, raster.height() as f32)
}

/// Calculate and show statistics
fn print_statistics(prepared: &Prepared) -> Result<()> {
    let buffer = source_buffer(&prepared.raster);
    let options = &prepared.options;

    let placements = report_paginate::layout_report(&buffer, &prepared.intervals, options)?;
    let capacity = match options.mode {
        report_paginate::ExportMode::Paginate => {
            report_paginate::page_capacity(&buffer, &options.geometry())
        }
        report_paginate::ExportMode::FitToOnePage => buffer.height,
    };
    let stats = report_paginate::calculate_statistics(&placements, capacity)?;

    println!("Pagination Statistics:");
    println!(
        "  Source: {}x{} px",
        prepared.raster.width(),
        prepared.raster.height()
    );
    println!("  Boundaries: {}", prepared.intervals.len());
    println!("  Pages: {}", stats.pages);
    println!("  Safe breaks: {}", stats.safe_cuts);
    println!("  Hard breaks: {}", stats.hard_cuts);
    println!("  Scale: {:.4} pt/px", stats.scale);
    println!(
        "  Slice height: {:.1}..{:.1} px (capacity {:.1})",
        stats.shortest_slice, stats.tallest_slice, stats.page_capacity
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Export {
            layout,
            output,
            title,
            stats_only,
        } => {
            let prepared = layout.prepare(title).await?;
            print_statistics(&prepared)?;

            if stats_only {
                return Ok(());
            }
            let Some(output) = output else {
                anyhow::bail!("--output is required unless --stats-only is set");
            };

            let document = report_paginate::export(
                &prepared.raster,
                &prepared.intervals,
                &prepared.options,
            )
            .await?;
            report_paginate::save_pdf(document, &output).await?;
            println!("Exported → {}", output.display());
        }

        Commands::Stats { layout } => {
            let prepared = layout.prepare(None).await?;
            print_statistics(&prepared)?;
        }

        Commands::InitConfig { output } => {
            report_paginate::ExportOptions::default()
                .save(&output)
                .await?;
            println!("Wrote default options → {}", output.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_takes_layout_flags_without_output() {
        let cli = Cli::try_parse_from([
            "rpag", "stats", "--image", "report.png", "--paper", "letter", "--tolerance", "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Stats { layout } => {
                assert_eq!(layout.image, PathBuf::from("report.png"));
                assert!(matches!(layout.paper, Some(PaperArg::Letter)));
                assert_eq!(layout.tolerance, Some(4.0));
            }
            _ => panic!("Expected stats command"),
        }
    }

    #[test]
    fn test_export_requires_output_unless_stats_only() {
        assert!(Cli::try_parse_from(["rpag", "export", "--image", "report.png"]).is_err());
        assert!(
            Cli::try_parse_from(["rpag", "export", "--image", "report.png", "--stats-only"]).is_ok()
        );
    }
}
