// What you GET:
// • Three App Store preview images per locale per device size, written as PNGs.
//   1) Hero: blue gradient, headline, phone/tablet mockup of the home screen.
//   2) Features: checklist cards above a mockup.
//   3) Pricing: dark PRO page with benefits, price cards and a mockup.
// • Console shows each language/target section and every saved file.
// • Exit status is non-zero if any image could not be produced.

mod assets;
mod batch;
mod blur;
mod compose;
mod config;
mod draw;
mod error;
mod fx;
mod gradient;
mod mockup;
mod scenes;
mod text;
mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use batch::Naming;
use clap::Parser;
use config::{FailurePolicy, RenderConfig};
use error::Result;

/// Generate localized App Store preview images from app screenshots.
#[derive(Parser, Debug)]
#[command(name = "store-previews", version, about)]
struct Cli {
    /// Directory holding 02_home_<lang>.png, 07_paywall_<lang>.png and their _ipad variants
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Where the preview PNGs are written (created if missing)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Bold font for headlines
    #[arg(long, value_name = "TTF")]
    font_bold: Option<PathBuf>,

    /// Regular font for subtitles and labels
    #[arg(long, value_name = "TTF")]
    font_regular: Option<PathBuf>,

    /// Font with the currency glyphs some locales need on price cards
    #[arg(long, value_name = "TTF")]
    font_currency: Option<PathBuf>,

    /// Only render these locales (repeatable), e.g. --lang en
    #[arg(long = "lang", value_name = "CODE")]
    langs: Vec<String>,

    /// Only render these targets (repeatable), e.g. --target iphone65
    #[arg(long = "target", value_name = "NAME")]
    targets: Vec<String>,

    /// Keep rendering after a failed image instead of stopping
    #[arg(long)]
    keep_going: bool,
}

impl Cli {
    /// Defaults with the command-line overrides applied. Also returns the naming
    /// scheme, fixed from the full catalog before `--lang` narrows it.
    fn into_config(self) -> Result<(RenderConfig, Naming)> {
        let mut cfg = RenderConfig::default();
        if let Some(dir) = self.assets {
            cfg.assets_dir = dir;
        }
        if let Some(dir) = self.out {
            cfg.out_dir = dir;
        }
        if let Some(p) = self.font_bold {
            cfg.fonts.bold = p;
        }
        if let Some(p) = self.font_regular {
            cfg.fonts.regular = p;
        }
        if let Some(p) = self.font_currency {
            cfg.fonts.currency = p;
        }
        if self.keep_going {
            cfg.on_failure = FailurePolicy::Skip;
        }

        let naming = Naming::for_catalog(&cfg.catalog);
        cfg.retain_locales(&self.langs)?;
        cfg.retain_targets(&self.targets)?;
        Ok((cfg, naming))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (cfg, naming) = match Cli::parse().into_config() {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("config: {cfg:?}");

    match batch::run(&cfg, naming) {
        Ok(report) if report.is_success() => {
            println!("\nDone! All previews saved to {}", cfg.out_dir.display());
            ExitCode::SUCCESS
        }
        Ok(report) => {
            log::error!("{} of {} image(s) failed", report.failed.len(), report.failed.len() + report.written.len());
            for (job, e) in &report.failed {
                log::error!("  {job}: {e}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
