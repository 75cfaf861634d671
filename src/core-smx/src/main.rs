use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use core_smx::sitemap_gen::ParamBindings;
use core_smx::{SitemapGenerator, SitemapOptions, SitemapOptionsBuilder, setup_logging};

#[derive(Parser)]
#[command(name = "core-sitemap")]
#[command(about = "The Core Sitemap Toolkit", long_about = None)]
struct CoreCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical paths derived from a route configuration
    Paths {
        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Generate sitemap file(s) from a route configuration
    Generate {
        #[command(flatten)]
        pipeline: PipelineArgs,

        /// Base URL prefixed to every path, e.g. https://example.com
        #[arg(long, value_parser = validate_hostname)]
        hostname: String,

        /// Output file path for the generated sitemap
        #[arg(short, long, value_parser = validate_output_file)]
        output: PathBuf,

        /// Maximum number of paths per sitemap document
        #[arg(long, default_value_t = core_smx::sitemap_gen::DEFAULT_LIMIT_COUNT_PATHS)]
        limit: usize,

        /// Public path prefix for shard locations in the index document
        #[arg(long, default_value = core_smx::sitemap_gen::DEFAULT_PUBLIC_PATH)]
        public_path: String,
    },
}

#[derive(Args)]
struct PipelineArgs {
    /// Route configuration JSON file: a route object or an array of routes
    #[arg(short, long, value_parser = validate_input_file)]
    routes: PathBuf,

    /// Filter rule (regex) tested against each path; repeatable
    #[arg(long = "rule")]
    rules: Vec<String>,

    /// Keep only paths matching a rule instead of dropping them
    #[arg(long)]
    keep_matching: bool,

    /// Parameter binding JSON file keyed by canonical path
    #[arg(long, value_parser = validate_input_file)]
    params: Option<PathBuf>,
}

fn validate_hostname(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid hostname: {}", e))
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!(
            "Output file parent directory does not exist: {}",
            parent.display()
        ));
    }

    Ok(path)
}

fn main() {
    setup_logging("core_smx=info");

    let cli = CoreCli::parse();

    match &cli.command {
        Commands::Paths { pipeline } => {
            let generator = build_generator(pipeline, SitemapOptions::builder());
            match generator.paths() {
                Ok(paths) => {
                    for path in paths {
                        println!("{path}");
                    }
                }
                Err(e) => {
                    eprintln!("ERROR: Cannot derive paths: {e}");
                    std::process::exit(1)
                }
            }
        }

        Commands::Generate {
            pipeline,
            hostname,
            output,
            limit,
            public_path,
        } => {
            let builder = SitemapOptions::builder()
                .hostname(hostname.clone())
                .limit_count_paths(*limit)
                .public_path(public_path.clone());

            let generator = build_generator(pipeline, builder);
            match generator.save(output) {
                Ok(()) => println!("Wrote sitemap to {}", output.display()),
                Err(e) => {
                    eprintln!("ERROR: Cannot generate sitemap: {e}");
                    std::process::exit(1)
                }
            }
        }
    }
}

/// Reads the route and binding files and assembles a ready generator.
/// Any problem along the way is fatal for a one-off CLI run.
fn build_generator(args: &PipelineArgs, builder: SitemapOptionsBuilder) -> SitemapGenerator {
    let routes = match std::fs::read_to_string(&args.routes) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("ERROR: Cannot read routes file ({:?}) due to: {e}", args.routes);
            std::process::exit(1)
        }
    };

    let routes: serde_json::Value = match serde_json::from_str(&routes) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("ERROR: Routes file ({:?}) is not valid JSON: {e}", args.routes);
            std::process::exit(1)
        }
    };

    let params = match &args.params {
        None => ParamBindings::new(),
        Some(file) => {
            let content = match std::fs::read_to_string(file) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("ERROR: Cannot read params file ({file:?}) due to: {e}");
                    std::process::exit(1)
                }
            };
            match serde_json::from_str(&content) {
                Ok(params) => params,
                Err(e) => {
                    eprintln!("ERROR: Params file ({file:?}) is not a valid binding table: {e}");
                    std::process::exit(1)
                }
            }
        }
    };

    let options = builder
        .rules(args.rules.clone())
        .is_valid(args.keep_matching)
        .params(params)
        .build();

    match SitemapGenerator::from_value(&routes, options) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("ERROR: Invalid route configuration: {e}");
            std::process::exit(1)
        }
    }
}
