// Batch driver: every locale x target x scene, one PNG each.
// Visual: the output folder fills up as
//   iphone65_preview_1_en.png, iphone65_preview_2_en.png, ... ipad13_preview_3_tr.png
// and the console narrates language, target and each saved file.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::compose::flatten;
use crate::config::{FailurePolicy, Locale, RenderConfig, Target};
use crate::error::{Error, Result};
use crate::scenes::{Scene, SceneInput};
use crate::text::FontBook;

/// Whether file names carry the locale code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    /// `<target>_preview_<n>_<lang>.png`
    PerLocale,
    /// `<target>_preview_<n>.png`
    SingleLocale,
}

impl Naming {
    /// Decide from the configured catalog, before any locale filter narrows it.
    pub fn for_catalog(catalog: &[Locale]) -> Self {
        if catalog.len() == 1 { Naming::SingleLocale } else { Naming::PerLocale }
    }

    pub fn file_name(self, target: &Target, scene: Scene, lang: &str) -> String {
        match self {
            Naming::PerLocale => format!("{}_preview_{}_{lang}.png", target.name, scene.number()),
            Naming::SingleLocale => format!("{}_preview_{}.png", target.name, scene.number()),
        }
    }
}

/// One cell of the matrix.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    pub locale: &'a Locale,
    pub target: &'a Target,
    pub scene: Scene,
}

impl fmt::Display for Job<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/scene {}", self.locale.code, self.target.name, self.scene.number())
    }
}

/// Jobs in run order: locale, then target, then scene.
pub fn jobs(cfg: &RenderConfig) -> Vec<Job<'_>> {
    let mut out = Vec::with_capacity(cfg.catalog.len() * cfg.targets.len() * Scene::ALL.len());
    for locale in &cfg.catalog {
        for target in &cfg.targets {
            for scene in Scene::ALL {
                out.push(Job { locale, target, scene });
            }
        }
    }
    out
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    /// Job label + why it failed. Only filled under [`FailurePolicy::Skip`].
    pub failed: Vec<(String, Error)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render and save one job. The canvas is flattened to RGB before encoding.
fn render_one(cfg: &RenderConfig, job: &Job<'_>, book: &mut FontBook, path: &Path) -> Result<()> {
    let shots = cfg.screenshots(job.locale);
    let input = SceneInput {
        target: job.target,
        locale: job.locale,
        shots: &shots,
        palette: &cfg.palette,
        fonts: &cfg.fonts,
    };
    let canvas = job.scene.render(&input, book)?;
    flatten(&canvas).save(path)?;
    Ok(())
}

/// Run the whole matrix into `cfg.out_dir`.
///
/// Under [`FailurePolicy::Abort`] the first failing job ends the run with its error;
/// files already written stay on disk. Under [`FailurePolicy::Skip`] failures are
/// logged and collected in the report.
pub fn run(cfg: &RenderConfig, naming: Naming) -> Result<RunReport> {
    cfg.validate()?;
    std::fs::create_dir_all(&cfg.out_dir)?;
    log::info!(
        "rendering {} locale(s) x {} target(s) x {} scenes from {}",
        cfg.catalog.len(),
        cfg.targets.len(),
        Scene::ALL.len(),
        cfg.assets_dir.display()
    );

    let mut book = FontBook::new();
    let mut report = RunReport::default();
    let mut current: Option<(&str, &str)> = None;

    for job in jobs(cfg) {
        /* Section headers whenever the language or target changes. */
        let key = (job.locale.code.as_str(), job.target.name.as_str());
        if current.map(|(lang, _)| lang) != Some(key.0) {
            println!("\n=== Language: {} ===", key.0.to_uppercase());
        }
        if current != Some(key) {
            let size = job.target.size;
            println!("\n--- {} ({}x{}) ---", key.1, size.width, size.height);
        }
        current = Some(key);

        let file = naming.file_name(job.target, job.scene, &job.locale.code);
        let path = cfg.out_dir.join(&file);
        match render_one(cfg, &job, &mut book, &path) {
            Ok(()) => {
                println!("  Saved {file}");
                report.written.push(path);
            }
            Err(e) => match cfg.on_failure {
                FailurePolicy::Abort => {
                    log::error!("{job} failed: {e}");
                    return Err(e);
                }
                FailurePolicy::Skip => {
                    log::warn!("{job} skipped: {e}");
                    report.failed.push((job.to_string(), e));
                }
            },
        }
    }

    log::info!("{} image(s) written to {}", report.written.len(), cfg.out_dir.display());
    Ok(report)
}
