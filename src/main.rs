mod duration;
mod error;
mod profile;
mod svg;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing::info;

use profile::{AboutCard, Profile};
use svg::Theme;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Render an About card with age and experience")]
struct Cli {
    /// Profile JSON with the card content.
    #[arg(long, default_value = "profile.json")]
    profile: PathBuf,

    /// Directory the SVG files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Compute as of this date (YYYY-MM-DD) instead of today.
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,
}

fn parse_today(s: &str) -> Result<NaiveDate, error::DateError> {
    duration::parse_date(s)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    info!(%today, profile = %cli.profile.display(), "rendering about card");

    let profile = Profile::load(&cli.profile)?;
    let card = profile.resolve(today)?;

    for path in write_cards(&card, &cli.out_dir)? {
        println!("Generated {}", path.display());
    }

    Ok(())
}

/// Writes one SVG per theme into `out_dir` and returns the written paths.
fn write_cards(card: &AboutCard, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(Theme::ALL.len());
    for theme in Theme::ALL {
        let path = out_dir.join(theme.file_name());
        fs::write(&path, svg::generate_svg(card, theme))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(?theme, path = %path.display(), "wrote card");
        written.push(path);
    }

    Ok(written)
}
