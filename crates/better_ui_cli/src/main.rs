//! BetterUi CLI
//!
//! Render page files to HTML, merge class lists and list component options.

use anyhow::{Context, Result};
use better_ui::{merge, BetterUiConfig, Page};
use better_ui_core::el;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod catalog;

#[derive(Parser)]
#[command(name = "better-ui")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "BetterUi component renderer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page file to HTML
    Render {
        /// Page file (TOML)
        page: PathBuf,

        /// Configuration file (defaults to better_ui.toml next to the page)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the components in a complete HTML document
        #[arg(short, long)]
        document: bool,
    },

    /// Merge class lists, later conflicting utilities win
    Merge {
        /// Class lists, in order
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// List enumerated options and their allowed values
    Options {
        /// Only list options of this component
        component: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            page,
            config,
            output,
            document,
        } => cmd_render(&page, config.as_deref(), output.as_deref(), document),

        Commands::Merge { classes } => cmd_merge(&classes),

        Commands::Options { component, json } => cmd_options(component.as_deref(), json),
    }
}

fn load_config(page: &Path, config: Option<&Path>) -> Result<BetterUiConfig> {
    let config = match config {
        Some(path) => BetterUiConfig::load(path),
        None => {
            let dir = page.parent().unwrap_or_else(|| Path::new("."));
            BetterUiConfig::load_from_dir(dir)
        }
    };
    config.context("Failed to load configuration")
}

fn cmd_render(page: &Path, config: Option<&Path>, output: Option<&Path>, document: bool) -> Result<()> {
    let config = load_config(page, config)?;
    debug!(
        variant = %config.defaults.variant,
        size = %config.defaults.size,
        "render defaults"
    );

    let content = fs::read_to_string(page)
        .with_context(|| format!("Failed to read {}", page.display()))?;
    let page_file = Page::from_toml_str_with_defaults(&content, &config.defaults)
        .with_context(|| format!("Invalid page {}", page.display()))?;

    let body = page_file.render();
    let html = if document {
        wrap_document(page_file.title.as_deref(), &body)
    } else {
        body
    };

    match output {
        Some(path) => {
            fs::write(path, format!("{html}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Rendered {} components to {}",
                page_file.components.len(),
                path.display()
            );
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn wrap_document(title: Option<&str>, body: &str) -> String {
    let title = el("title").text(title.unwrap_or("BetterUi")).to_html();
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n{title}\n</head>\n<body>\n{body}\n</body>\n</html>"
    )
}

fn cmd_merge(classes: &[String]) -> Result<()> {
    println!("{}", merge(classes));
    Ok(())
}

fn cmd_options(component: Option<&str>, json: bool) -> Result<()> {
    let entries = match component {
        Some(name) => catalog::options_for(name).with_context(|| {
            format!(
                "Unknown component '{}'. Valid components: {}",
                name,
                catalog::COMPONENTS.join(", ")
            )
        })?,
        None => catalog::catalog(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{:<16} {:<20} {} (default: {})",
            entry.component,
            entry.field,
            entry.allowed.join(", "),
            entry.default
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from(["better-ui", "-v", "render", "page.toml", "--document"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Render { page, document, .. } => {
                assert_eq!(page, PathBuf::from("page.toml"));
                assert!(document);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_merge_requires_classes() {
        assert!(Cli::try_parse_from(["better-ui", "merge"]).is_err());
    }

    #[test]
    fn test_wrap_document_escapes_title() {
        let html = wrap_document(Some("Q&A"), "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Q&amp;A</title>"));
        assert!(html.contains("<body>\n<p>hi</p>\n</body>"));
    }
}
