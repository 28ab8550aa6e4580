use clap::{Parser, Subcommand};
use slidegen::carousel::{self, BuildOptions, SortMode};
use slidegen::{featured, output};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slidegen")]
#[command(about = "Generate JSON slide manifests from directories of images")]
#[command(long_about = "\
Generate JSON slide manifests from directories of images

Your filesystem is the data source: file names become captions and
directory contents become manifest entries.

  slidegen carousel                          # scan images/carousel → carousel.json
  slidegen carousel --sort mtime --dry-run   # newest first, print instead of write
  slidegen carousel --url-prefix https://cdn.example.com
  slidegen featured                          # images/featured → data/featured.json

Carousel entries are {src, alt, caption, link}: src is a forward-slash
URL path under --url-prefix, captions come from the file name with trade
acronyms (HVAC, IAQ, ...) preserved. Featured entries are
{src, alt, caption} with plain title-cased alt text.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build carousel.json from an images directory
    Carousel(CarouselArgs),
    /// Build data/featured.json from images/featured
    Featured,
}

/// Flags for the carousel builder.
#[derive(clap::Args)]
struct CarouselArgs {
    /// Folder to scan
    #[arg(long, default_value = "images/carousel")]
    images_root: PathBuf,

    /// Site root for making URL paths relative
    #[arg(long, default_value = ".")]
    site_root: PathBuf,

    /// Output JSON path
    #[arg(long, default_value = "carousel.json")]
    output: PathBuf,

    /// URL prefix for src paths, e.g. '/' or 'https://example.com'
    #[arg(long, default_value = "/")]
    url_prefix: String,

    /// Link attached to every slide
    #[arg(long, default_value = "#services")]
    default_link: String,

    /// Sort order
    #[arg(long, value_enum, default_value = "name")]
    sort: SortMode,

    /// Do not scan subfolders
    #[arg(long)]
    no_recursive: bool,

    /// Print JSON to stdout but don't write the file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Carousel(args) => {
            let entries = carousel::build(&BuildOptions {
                images_root: args.images_root,
                site_root: args.site_root,
                url_prefix: args.url_prefix,
                default_link: args.default_link,
                sort: args.sort,
                recursive: !args.no_recursive,
            })?;
            let json = serde_json::to_string_pretty(&entries)?;
            if args.dry_run {
                println!("{json}");
            } else {
                if let Some(parent) = args.output.parent()
                    && !parent.as_os_str().is_empty()
                {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&args.output, json)?;
                output::print_carousel_summary(entries.len(), &args.output);
            }
        }
        Command::Featured => {
            let items = featured::build_items(Path::new(featured::FEATURED_DIR))?;
            let out = Path::new(featured::OUTPUT_PATH);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&items)?;
            fs::write(out, json)?;
            output::print_featured_summary(out, items.len());
        }
    }

    Ok(())
}
