//! docweave CLI - layout reassembly tool

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use docweave::{
    assemble, render, AssembleOptions, AssignmentPolicy, JsonLayoutSource, RenderOptions,
};

#[derive(Parser)]
#[command(name = "docweave")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reassemble extracted page layouts into self-contained HTML", long_about = None)]
struct Cli {
    /// Input layout dump (JSON)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output HTML file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Document title (defaults to the input file name)
    #[arg(long)]
    title: Option<String>,

    /// Image-to-row assignment policy
    #[arg(long, value_enum, default_value = "ordered")]
    policy: Policy,

    /// Horizontal matching tolerance in page units
    #[arg(long, default_value = "50.0")]
    x_tolerance: f32,

    /// Vertical matching tolerance in page units
    #[arg(long, default_value = "30.0")]
    y_tolerance: f32,

    /// Omit the embedded stylesheet
    #[arg(long)]
    no_styles: bool,

    /// Print per-image notices
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Pop images top-to-bottom, one per data row
    Ordered,
    /// Match each row to the nearest image within tolerance
    Nearest,
}

impl From<Policy> for AssignmentPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Ordered => AssignmentPolicy::OrderedGreedy,
            Policy::Nearest => AssignmentPolicy::NearestNeighbor,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> docweave::Result<()> {
    let source = JsonLayoutSource::open(&cli.input)?;

    let assemble_options = AssembleOptions::new()
        .with_policy(cli.policy.into())
        .with_tolerances(cli.x_tolerance, cli.y_tolerance);
    let document = assemble(&source, &assemble_options)?;

    if cli.verbose {
        for notice in &document.notices {
            eprintln!(
                "{} page {}, image {}: {}",
                "notice:".yellow(),
                notice.page,
                notice.image_index,
                notice.reason
            );
        }
    }

    let title = cli.title.clone().unwrap_or_else(|| {
        cli.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Converted Document".to_string())
    });
    let render_options = RenderOptions::new()
        .with_title(title)
        .with_styles(!cli.no_styles);
    let html = render::to_html(&document, &render_options)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, html)?;
            eprintln!(
                "{} {} page(s) -> {}",
                "done:".green().bold(),
                document.page_count(),
                path.display()
            );
        }
        None => print!("{html}"),
    }

    Ok(())
}
