use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockhtml::{PageSummary, RenderOptions, RenderService};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blockhtml")]
#[command(about = "Render hosted block documents to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON block listing to HTML
    Render {
        /// Input file (stdin when omitted or `-`)
        input: Option<PathBuf>,
        /// TOML file with render options
        #[arg(long)]
        config: Option<PathBuf>,
        /// Add `class="language-…"` to code blocks
        #[arg(long)]
        code_language_class: bool,
    },
    /// Print the title, date and tags of a JSON page object
    Page {
        /// Input file (stdin when omitted or `-`)
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            config,
            code_language_class,
        } => {
            let mut options = load_options(config.as_deref())?;
            options.code_language_class |= code_language_class;

            let service = RenderService::with_options(options);
            let json = read_input(input.as_deref())?;
            let html = service.render_json(&json).context("failed to render blocks")?;
            println!("{html}");
        }
        Commands::Page { input } => {
            let json = read_input(input.as_deref())?;
            let page: serde_json::Value =
                serde_json::from_str(&json).context("page is not valid JSON")?;
            let service = RenderService::new();
            print!("{}", page_report(&service, &PageSummary::from_value(&page)));
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<RenderOptions> {
    let Some(path) = path else {
        return Ok(RenderOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    log::info!("using render options from {}", path.display());
    parse_options(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn parse_options(text: &str) -> Result<RenderOptions> {
    Ok(toml::from_str(text)?)
}

fn page_report(service: &RenderService, page: &PageSummary) -> String {
    let mut out = format!("title: {}\n", service.render_title(&page.title));
    if let Some(date) = &page.date {
        out.push_str(&format!("date: {date}\n"));
    }
    if !page.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", page.tags.join(", ")));
    }
    out
}
