//! Folio CLI
//!
//! Mount the portfolio carousel on a generated page and replay scripted
//! interaction sessions against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod page;
mod report;
mod session;

use folio_widgets::Carousel;
use page::PageSpec;
use session::Session;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Portfolio carousel runner", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an interaction session and report the final carousel state
    Run {
        /// Session file (TOML)
        session: PathBuf,

        /// Run the clock to this time (ms) after the last step
        #[arg(long)]
        until: Option<u64>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the page outline with the carousel mounted
    Page {
        /// Number of project slides
        #[arg(short, long, default_value_t = 4)]
        slides: usize,

        /// Viewport width in CSS pixels
        #[arg(short, long, default_value_t = 1200.0)]
        width: f32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            session,
            until,
            json,
        } => cmd_run(&session, until, json),
        Commands::Page { slides, width } => cmd_page(slides, width),
    }
}

fn cmd_run(path: &Path, until: Option<u64>, json: bool) -> Result<()> {
    let session = Session::load(path)?;
    info!(
        path = %path.display(),
        steps = session.steps.len(),
        "replaying session"
    );

    let report = session.replay(until)?;
    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        for step in &report.steps {
            println!(
                "{:>7}ms  {:<32} {:<8} slide {}",
                step.at_ms,
                format!("{:?}", step.action),
                if step.accepted { "ok" } else { "dropped" },
                step.slide + 1
            );
        }
        println!("{}", report.summary());
    }
    Ok(())
}

fn cmd_page(slides: usize, width: f32) -> Result<()> {
    let spec = PageSpec {
        slides,
        width,
        ..Default::default()
    };
    let mut doc = page::build(&spec);
    let config = folio_widgets::CarouselConfig::default().with_options(&page::portfolio_options());
    match Carousel::mount(&mut doc, config).context("Failed to mount carousel")? {
        Some(carousel) if carousel.is_inert() => info!("carousel mounted without slides"),
        Some(carousel) => info!(slides = carousel.slide_count(), "carousel mounted"),
        None => info!("carousel markup not present"),
    }
    print!("{}", page::outline(&doc));
    Ok(())
}
