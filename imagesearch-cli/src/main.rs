use clap::Parser;
use imagesearch::io::{load_rgba_image, load_searchable_png};
use imagesearch::{Matcher, PixelView, Rect, Searchable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Find a needle image inside haystack images (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Override the tolerance from the config file (0 = exact).
    #[arg(short, long)]
    tolerance: Option<u8>,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for the matcher.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoiConfig {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    needle_path: String,
    haystack_paths: Vec<String>,
    tolerance: u8,
    find_all: bool,
    roi: Option<RoiConfig>,
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct RectRecord {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl From<Rect> for RectRecord {
    fn from(value: Rect) -> Self {
        Self {
            x0: value.min.x,
            y0: value.min.y,
            x1: value.max.x,
            y1: value.max.y,
        }
    }
}

#[derive(Debug, Serialize)]
struct HaystackRecord {
    path: String,
    found: bool,
    rect: Option<RectRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all: Option<Vec<RectRecord>>,
}

#[derive(Debug, Serialize)]
struct Output {
    needle: String,
    tolerance: u8,
    mode: &'static str,
    results: Vec<HaystackRecord>,
}

fn search_one(
    matcher: &Matcher,
    view: PixelView<'_>,
    path: &str,
    find_all: bool,
) -> HaystackRecord {
    let rect = matcher.find_in(view);
    tracing::info!(haystack = path, found = rect.is_some(), "searched");
    let all = find_all.then(|| {
        matcher
            .search_all_in(view)
            .into_iter()
            .map(RectRecord::from)
            .collect()
    });
    HaystackRecord {
        path: path.to_string(),
        found: rect.is_some(),
        rect: rect.map(RectRecord::from),
        all,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("imagesearch=debug".parse()?),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let mut config: Config = serde_json::from_str(&config_text)?;
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if config.needle_path.is_empty() || config.haystack_paths.is_empty() {
        return Err("needle_path and haystack_paths must be set in the config".into());
    }

    let matcher = load_searchable_png(&config.needle_path, config.tolerance)?;
    let (needle_width, needle_height) = matcher.size();
    tracing::info!(
        needle = config.needle_path.as_str(),
        width = needle_width,
        height = needle_height,
        tolerance = config.tolerance,
        "needle loaded"
    );

    let mut results = Vec::with_capacity(config.haystack_paths.len());
    for path in &config.haystack_paths {
        let haystack = load_rgba_image(path)?;
        let full = haystack.view();
        let view = match &config.roi {
            Some(roi) => full.roi(roi.x, roi.y, roi.width, roi.height)?,
            None => full,
        };
        results.push(search_one(&matcher, view, path, config.find_all));
    }

    let output = Output {
        needle: config.needle_path.clone(),
        tolerance: matcher.tolerance(),
        mode: match matcher {
            Matcher::Exact(_) => "exact",
            Matcher::Tolerance(_) => "tolerance",
        },
        results,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
