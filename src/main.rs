// src/main.rs
//
// reporthtml — Markdown-flavored report to HTML
//
// - Reads a plain-text report (paragraphs, "- "/"* " bullets, **bold**).
// - Writes an HTML fragment, or a full page when a page flag is given.
// - Output always ends with exactly one '\n'.
//
// CLI flags:
//   --page             : wrap the fragment in the built-in page shell
//   --user-name <NAME> : name shown on the page (implies --page)
//   --template <PATH>  : custom page shell (implies --page)
//   --fragment         : force fragment output
// Default: fragment. --fragment wins over every page-implying flag.
//
// Logging goes to stderr and is controlled by RUST_LOG (default: warn).

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use reporthtml::{render, Page};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Wrap the fragment in a complete HTML page
    #[arg(long, action = ArgAction::SetTrue)]
    page: bool,

    /// Force fragment output even if page flags are present
    #[arg(long, action = ArgAction::SetTrue)]
    fragment: bool,

    /// Name shown on the page (implies --page)
    #[arg(long = "user-name", value_name = "NAME")]
    user_name: Option<String>,

    /// Page shell containing __DIAGNOSIS_RESULT__ (implies --page)
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Input report ("-" for stdin)
    input: PathBuf,

    /// Output file (default: stdout)
    output: Option<PathBuf>,
}

impl Cli {
    fn wants_page(&self) -> bool {
        if self.fragment {
            false
        } else {
            self.page || self.user_name.is_some() || self.template.is_some()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reporthtml=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let text = read_input(&cli.input)?;
    tracing::info!(bytes = text.len(), input = %cli.input.display(), "read report");

    let fragment = render(&text);

    let mut html = if cli.wants_page() {
        let user_name = cli.user_name.clone().unwrap_or_default();
        let page = match &cli.template {
            Some(path) => {
                let shell = fs::read_to_string(path)
                    .with_context(|| format!("failed to read template {}", path.display()))?;
                Page::with_template(shell, user_name)
                    .with_context(|| format!("invalid template {}", path.display()))?
            }
            None => Page::new(user_name),
        };
        page.assemble(&fragment)
    } else {
        fragment
    };
    html.push('\n');

    match &cli.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(bytes = html.len(), output = %path.display(), "wrote html");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}
