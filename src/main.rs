use clap::{Parser, Subcommand};
use seo_resolve::types::{PageId, ResolveInput};
use seo_resolve::{config, output, regions, resolve};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seo-resolve")]
#[command(about = "Resolve SEO metadata records for localized service pages")]
#[command(long_about = "\
Resolve SEO metadata records for localized service pages

The engine merges three override layers with fixed precedence (global
defaults -> page config -> dynamic per-entity config) into one complete
record: title, description, canonical URL, hreflang alternates, Open Graph
and Twitter cards, geo tags, and a JSON-LD structured-data graph.

Examples:

  seo-resolve resolve --page standort --path /standort/berlin
  seo-resolve resolve --page preise --path /preise --json
  seo-resolve resolve --input request.json
  seo-resolve regions
  seo-resolve check

Site identity (base URL, name, share image) comes from site.toml in the
config directory; run 'seo-resolve gen-config' for a documented template.")]
#[command(version)]
struct Cli {
    /// Directory containing site.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one page into a full metadata record
    Resolve(ResolveArgs),
    /// List the serviceable regions and their slugs
    Regions,
    /// Validate the region dataset and site config without resolving
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct ResolveArgs {
    /// Page identity
    #[arg(long, value_enum, required_unless_present = "input")]
    page: Option<PageId>,

    /// Requested pathname (query strings and trailing slashes are stripped)
    #[arg(long, default_value = "/")]
    path: String,

    /// Read a full resolution input (page, path, entities) from a JSON file
    #[arg(long, conflicts_with_all = ["page", "path"])]
    input: Option<PathBuf>,

    /// Emit the resolved record as JSON instead of the summary view
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => {
            let site = config::load_config(&cli.config_dir)?;
            let engine = resolve::SeoEngine::new(site)?;
            let input = match &args.input {
                Some(path) => {
                    let content = std::fs::read_to_string(path)?;
                    serde_json::from_str::<ResolveInput>(&content)?
                }
                None => ResolveInput::page(
                    args.page.expect("clap enforces --page without --input"),
                    &args.path,
                ),
            };
            let seo = engine.resolve(&input);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&seo)?);
            } else {
                output::print_resolved(&seo);
            }
        }
        Command::Regions => {
            let registry = regions::RegionRegistry::new(seo_resolve::data::service_regions())?;
            output::print_regions(&registry);
        }
        Command::Check => {
            let site = config::load_config(&cli.config_dir)?;
            let registry = regions::RegionRegistry::new(seo_resolve::data::service_regions())?;
            println!(
                "==> {} regions valid, base URL {}",
                registry.len(),
                site.base_url
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
