use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use linkpage_page::PageSession;
use linkpage_renderer::{HtmlOptions, PlaceholderFeed};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Directory containing the page config (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Render in edit mode (hidden blocks dimmed, controls shown)
    #[arg(short, long)]
    pub edit: bool,

    /// Write HTML to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,

    /// Compact output (overrides config)
    #[arg(long)]
    pub compact: bool,

    /// Populate RSS previews with placeholder entries
    #[arg(long)]
    pub feeds: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let html = render_to_string(&args, cwd)?;

    match &args.out {
        Some(out) => {
            let out_path = PathBuf::from(cwd).join(out);
            fs::write(&out_path, &html)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            println!("  {} Rendered page → {}", "✓".green(), out_path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

fn render_to_string(args: &RenderArgs, cwd: &str) -> Result<String> {
    let dir = PathBuf::from(cwd).join(&args.path);
    let config = Config::load(&dir)?;

    let options = if args.compact {
        HtmlOptions::compact()
    } else {
        config.html_options()
    };

    let mut session = PageSession::new(config.into_page());
    session.set_editing(args.edit);

    if args.feeds {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("Failed to start feed runtime")?;
        let applied = runtime.block_on(session.refresh_feeds(&PlaceholderFeed::default()));
        tracing::info!(applied, "Populated feed previews");
    }

    tracing::info!(
        blocks = session.page().len(),
        editing = args.edit,
        "Rendering page"
    );
    Ok(session.render_html(&options))
}
