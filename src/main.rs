use clap::{Parser, Subcommand};
use reelfolio::catalog::Platform;
use reelfolio::contact::{ContactFields, ContactForm};
use reelfolio::gallery::GalleryViewModel;
use reelfolio::relay::EmailJsRelay;
use reelfolio::{config, generate, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reelfolio")]
#[command(about = "Portfolio site generator for video editors")]
#[command(long_about = "\
Portfolio site generator for video editors

Builds a single-page site with a filterable video gallery, service packages,
and a contact form that relays messages through an email service.

Content structure:

  content/
  ├── config.toml        # Site config (optional)
  ├── portfolio.toml     # [[entries]] with long-form or short-form media
  ├── packages.toml      # [[packages]] for the services section
  ├── skills.toml        # [[software]] and [[core]] for the skills section
  ├── about.md           # Hero bio
  └── assets/            # Copied to output root (thumbnails, favicon)

Relay credentials may be set in [contact.relay] or with
REELFOLIO_RELAY_SERVICE_ID, REELFOLIO_RELAY_TEMPLATE_ID and
REELFOLIO_RELAY_PUBLIC_KEY.

Run 'reelfolio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".reelfolio-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the HTML site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// List portfolio entries the way the gallery filters them
    Catalog {
        /// Filter key: long-form or short-form (defaults to the configured filter)
        #[arg(long)]
        filter: Option<String>,
    },
    /// Send a contact message through the configured relay
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Catalog { filter } => {
            let manifest = scan::scan(&cli.source)?;
            let mut view =
                GalleryViewModel::new(&manifest.catalog, manifest.config.default_filter());
            if let Some(key) = filter {
                let platform: Platform = key.parse()?;
                view.change_filter(platform.key());
            }
            output::print_catalog(&view);
        }
        Command::Send {
            name,
            email,
            subject,
            message,
        } => {
            let manifest = scan::scan(&cli.source)?;
            let contact = &manifest.config.contact;
            let relay = EmailJsRelay::new(contact.relay.endpoint.clone());
            let mut form = ContactForm::with_fields(ContactFields {
                name,
                email,
                subject,
                message,
            });

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(form.submit(contact, &relay));
            output::print_submission(&form);
            if form.error().is_some() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
