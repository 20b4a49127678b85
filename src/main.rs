use anyhow::{anyhow, Context};
use clap::Parser;
use resize_params::{ImageDimensions, ParameterResolver, ParamsConfig, RouteMatch};
use std::path::PathBuf;

/// Resolve a synthetic resize request and print the result as JSON
#[derive(Parser, Debug)]
#[command(name = "resize-params")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a YAML file overriding the default limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path variable as name=value (e.g. size=200, extension=.webp)
    #[arg(short = 'v', long = "var", value_parser = parse_key_value)]
    vars: Vec<(String, String)>,

    /// Raw query string (e.g. "grayscale&blur=3")
    #[arg(short, long, default_value = "")]
    query: String,

    /// Natural dimensions of the source image as WIDTHxHEIGHT
    #[arg(short, long, value_parser = parse_dimensions)]
    natural: ImageDimensions,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

fn parse_dimensions(raw: &str) -> Result<ImageDimensions, String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", raw))?;
    let width = w.parse().map_err(|_| format!("invalid width '{}'", w))?;
    let height = h.parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok(ImageDimensions::new(width, height))
}

fn main() -> anyhow::Result<()> {
    resize_params::logging::init_subscriber()
        .map_err(|e| anyhow!("Failed to initialize logging subsystem: {}", e))?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let config = ParamsConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!(config_file = %path.display(), "Configuration loaded successfully");
            config
        }
        None => ParamsConfig::default(),
    };

    let route = args
        .vars
        .iter()
        .fold(RouteMatch::new(), |route, (name, value)| {
            route.with_path_var(name.as_str(), value.as_str())
        })
        .with_query_string(&args.query);

    let resolver = ParameterResolver::new(config).context("Invalid configuration")?;
    tracing::info!(
        max_image_size = resolver.config().max_image_size,
        min_blur_amount = resolver.config().min_blur_amount,
        max_blur_amount = resolver.config().max_blur_amount,
        "Resolver limits"
    );

    match resolver.resolve_for(&route, &args.natural) {
        Ok(resolved) => {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
