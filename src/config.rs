//! Typed configuration for a preview run.
//!
//! Everything the renderer needs that is not a pixel lives here: where the
//! screenshots and fonts are, the brand palette, which output sizes to make, and
//! the copy for every locale. Defaults reproduce the App Store set for SPC Tools
//! (English + Turkish, iPhone 6.5" + iPad 13"); the CLI overrides paths and
//! narrows the matrix.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{Color, DeviceClass, Size};

/// Font files by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    pub bold: PathBuf,
    pub regular: PathBuf,
    /// Used for price lines in locales whose currency sign the primary fonts lack.
    pub currency: PathBuf,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            bold: PathBuf::from("/System/Library/Fonts/Supplemental/Arial Bold.ttf"),
            regular: PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
            currency: PathBuf::from("/System/Library/Fonts/SFCompact.ttf"),
        }
    }
}

/// Brand colors + the per-scene background stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub brand: Color,
    pub white: Color,
    pub dark: Color,
    pub light_bg: Color,
    pub green: Color,
    pub hero_top: Color,
    pub hero_bottom: Color,
    pub pricing_top: Color,
    pub pricing_bottom: Color,
    pub card_gray: Color,
    pub muted: Color,
    pub muted_label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            brand: Color::rgb(0, 122, 255),
            white: Color::rgb(255, 255, 255),
            dark: Color::rgb(30, 30, 30),
            light_bg: Color::rgb(245, 245, 247),
            green: Color::rgb(52, 199, 89),
            hero_top: Color::rgb(0, 140, 255),
            hero_bottom: Color::rgb(0, 70, 200),
            pricing_top: Color::rgb(35, 35, 40),
            pricing_bottom: Color::rgb(18, 18, 22),
            card_gray: Color::rgb(55, 55, 60),
            muted: Color::rgb(180, 180, 180),
            muted_label: Color::rgb(150, 150, 150),
        }
    }
}

/// A named output resolution for one device class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub size: Size,
    pub device: DeviceClass,
}

impl Target {
    pub fn new(name: &str, width: u32, height: u32, device: DeviceClass) -> Self {
        Self { name: name.to_string(), size: Size::new(width, height), device }
    }
}

/// App Store required sizes.
pub fn default_targets() -> Vec<Target> {
    vec![
        Target::new("iphone65", 1242, 2688, DeviceClass::Phone),
        Target::new("ipad13", 2048, 2732, DeviceClass::Tablet),
    ]
}

/// Which font draws the pricing card lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFont {
    /// Bold price, regular sub-line.
    Primary,
    /// Both lines in the currency-capable font.
    Currency,
}

/// Screenshot kinds a scene can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    Home,
    Paywall,
}

/// All copy for one locale, one field per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleText {
    pub hero_1: String,
    pub hero_2: String,
    pub hero_sub_1: String,
    pub hero_sub_2: String,
    pub feat_title_1: String,
    pub feat_title_2: String,
    pub features: Vec<String>,
    pub pro_title: String,
    pub pro_sub: String,
    pub benefits: Vec<String>,
    pub monthly: String,
    pub monthly_sub: String,
    pub yearly: String,
    pub yearly_sub: String,
}

impl LocaleText {
    /// Every slot must be filled; an empty one would silently leave a gap in the layout.
    pub fn validate(&self, code: &str) -> Result<()> {
        let singles = [
            ("hero_1", &self.hero_1),
            ("hero_2", &self.hero_2),
            ("hero_sub_1", &self.hero_sub_1),
            ("hero_sub_2", &self.hero_sub_2),
            ("feat_title_1", &self.feat_title_1),
            ("feat_title_2", &self.feat_title_2),
            ("pro_title", &self.pro_title),
            ("pro_sub", &self.pro_sub),
            ("monthly", &self.monthly),
            ("monthly_sub", &self.monthly_sub),
            ("yearly", &self.yearly),
            ("yearly_sub", &self.yearly_sub),
        ];
        for (slot, value) in singles {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("locale {code}: slot `{slot}` is empty")));
            }
        }
        for (slot, list) in [("features", &self.features), ("benefits", &self.benefits)] {
            if list.is_empty() {
                return Err(Error::Config(format!("locale {code}: list `{slot}` has no rows")));
            }
            if let Some(i) = list.iter().position(|s| s.trim().is_empty()) {
                return Err(Error::Config(format!("locale {code}: `{slot}[{i}]` is empty")));
            }
        }
        Ok(())
    }
}

/// One supported locale: copy + the two per-locale rendering choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub code: String,
    pub text: LocaleText,
    pub price_font: PriceFont,
    /// The pricing scene shows whichever screenshot already displays locale-correct prices.
    pub pricing_shot: Shot,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn english() -> Locale {
    Locale {
        code: "en".into(),
        text: LocaleText {
            hero_1: "15 Professional".into(),
            hero_2: "SPC Calculators".into(),
            hero_sub_1: "Quality engineering calculations".into(),
            hero_sub_2: "now in your pocket".into(),
            feat_title_1: "All SPC Tools".into(),
            feat_title_2: "In One Place".into(),
            features: strings(&[
                "Cp/Cpk & Pp/Ppk Analysis",
                "OEE & Sigma Level",
                "Control Charts & Histogram",
                "Pareto & FMEA Analysis",
                "Gage R&R & Hypothesis Test",
            ]),
            pro_title: "SPC Tools PRO".into(),
            pro_sub: "Unlimited access, 7-day free trial".into(),
            benefits: strings(&[
                "15 professional SPC calculators",
                "Unlimited calculation history",
                "All SPC tools and analysis",
            ]),
            monthly: "$2.99 / mo".into(),
            monthly_sub: "Monthly plan".into(),
            yearly: "$19.99 / yr".into(),
            yearly_sub: "Save 44%".into(),
        },
        price_font: PriceFont::Primary,
        pricing_shot: Shot::Paywall,
    }
}

pub fn turkish() -> Locale {
    Locale {
        code: "tr".into(),
        text: LocaleText {
            hero_1: "15 Profesyonel".into(),
            hero_2: "SPC Hesaplayıcı".into(),
            hero_sub_1: "Kalite mühendisliği hesaplamalarınız".into(),
            hero_sub_2: "artık cebinizde".into(),
            feat_title_1: "Tüm SPC Araçları".into(),
            feat_title_2: "Tek Yerde".into(),
            features: strings(&[
                "Cp/Cpk & Pp/Ppk Analizi",
                "OEE & Sigma Seviyesi",
                "Kontrol Grafikleri & Histogram",
                "Pareto & FMEA Analizi",
                "Gage R&R & Hipotez Testi",
            ]),
            pro_title: "SPC Tools PRO".into(),
            pro_sub: "Sınırsız erişim, 7 gün ücretsiz".into(),
            benefits: strings(&[
                "15 profesyonel SPC hesaplayıcı",
                "Sınırsız hesaplama geçmişi",
                "Tüm SPC araçları ve analiz",
            ]),
            monthly: "₺49,99 / ay".into(),
            monthly_sub: "Aylık abonelik".into(),
            yearly: "₺349,99 / yıl".into(),
            yearly_sub: "%42 tasarruf".into(),
        },
        price_font: PriceFont::Currency,
        // The paywall screenshot still shows $ prices, so the home screen is used instead.
        pricing_shot: Shot::Home,
    }
}

/// Screenshot files for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotSet {
    pub home: PathBuf,
    pub paywall: PathBuf,
    pub home_tablet: PathBuf,
    pub paywall_tablet: PathBuf,
}

impl ScreenshotSet {
    /// `02_home_<code>.png`, `07_paywall_<code>.png` and their `_ipad` variants.
    pub fn for_locale(dir: &Path, code: &str) -> Self {
        Self {
            home: dir.join(format!("02_home_{code}.png")),
            paywall: dir.join(format!("07_paywall_{code}.png")),
            home_tablet: dir.join(format!("02_home_ipad_{code}.png")),
            paywall_tablet: dir.join(format!("07_paywall_ipad_{code}.png")),
        }
    }

    pub fn pick(&self, shot: Shot, device: DeviceClass) -> &Path {
        match (shot, device) {
            (Shot::Home, DeviceClass::Phone) => &self.home,
            (Shot::Paywall, DeviceClass::Phone) => &self.paywall,
            (Shot::Home, DeviceClass::Tablet) => &self.home_tablet,
            (Shot::Paywall, DeviceClass::Tablet) => &self.paywall_tablet,
        }
    }
}

/// What to do when one image of the matrix fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the run at the first failure.
    #[default]
    Abort,
    /// Log a warning, carry on, and report a failing exit status at the end.
    Skip,
}

/// Everything a run needs, passed in explicitly.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub assets_dir: PathBuf,
    pub out_dir: PathBuf,
    pub fonts: FontSet,
    pub palette: Palette,
    pub targets: Vec<Target>,
    pub catalog: Vec<Locale>,
    pub on_failure: FailurePolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("AppStore/Screenshots"),
            out_dir: PathBuf::from("AppStore/Previews"),
            fonts: FontSet::default(),
            palette: Palette::default(),
            targets: default_targets(),
            catalog: vec![english(), turkish()],
            on_failure: FailurePolicy::default(),
        }
    }
}

impl RenderConfig {
    /// Check the tables once, up front, so a typo never surfaces halfway through a run.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(Error::Config("no locales configured".into()));
        }
        let mut codes = HashSet::new();
        for locale in &self.catalog {
            if locale.code.trim().is_empty() {
                return Err(Error::Config("locale with empty code".into()));
            }
            if !codes.insert(locale.code.as_str()) {
                return Err(Error::Config(format!("locale {} listed twice", locale.code)));
            }
            locale.text.validate(&locale.code)?;
        }

        if self.targets.is_empty() {
            return Err(Error::Config("no targets configured".into()));
        }
        let mut names = HashSet::new();
        for t in &self.targets {
            if !names.insert(t.name.as_str()) {
                return Err(Error::Config(format!("target {} listed twice", t.name)));
            }
            if t.size.is_empty() {
                return Err(Error::InvalidGeometry(format!(
                    "target {} has size {}x{}",
                    t.name, t.size.width, t.size.height
                )));
            }
        }
        Ok(())
    }

    /// Keep only the named locales (in catalog order). Unknown names are an error.
    pub fn retain_locales(&mut self, codes: &[String]) -> Result<()> {
        if codes.is_empty() {
            return Ok(());
        }
        if let Some(unknown) = codes.iter().find(|c| !self.catalog.iter().any(|l| &l.code == *c)) {
            return Err(Error::Config(format!("unknown locale {unknown}")));
        }
        self.catalog.retain(|l| codes.contains(&l.code));
        Ok(())
    }

    /// Keep only the named targets (in config order). Unknown names are an error.
    pub fn retain_targets(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        if let Some(unknown) = names.iter().find(|n| !self.targets.iter().any(|t| &t.name == *n)) {
            return Err(Error::Config(format!("unknown target {unknown}")));
        }
        self.targets.retain(|t| names.contains(&t.name));
        Ok(())
    }

    pub fn screenshots(&self, locale: &Locale) -> ScreenshotSet {
        ScreenshotSet::for_locale(&self.assets_dir, &locale.code)
    }
}
