//! `brief.toml`: site title, deployment size and widget tuning.

use crate::error::{BriefError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default file name looked up by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "brief.toml";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BriefConfig {
    pub site: SiteConfig,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub charts: ChartsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub deployment: Deployment,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Louisville Nurses: The Long Road to a Union Contract".to_string(),
            deployment: Deployment::Full,
        }
    }
}

/// Which widgets a page ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    /// Every section
    #[default]
    Full,
    /// Timeline, analysis, FAQ accordion, navigation and footer only
    Core,
}

/// Interactive section of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Navigation,
    FooterYear,
    Timeline,
    Analysis,
    Outcomes,
    Voices,
    WhyItMatters,
    UnionBenefits,
    Staffing,
    Accordion,
}

impl Widget {
    pub const ALL: [Widget; 10] = [
        Widget::Navigation,
        Widget::FooterYear,
        Widget::Timeline,
        Widget::Analysis,
        Widget::Outcomes,
        Widget::Voices,
        Widget::WhyItMatters,
        Widget::UnionBenefits,
        Widget::Staffing,
        Widget::Accordion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Widget::Navigation => "navigation",
            Widget::FooterYear => "footer-year",
            Widget::Timeline => "timeline",
            Widget::Analysis => "analysis",
            Widget::Outcomes => "outcomes",
            Widget::Voices => "voices",
            Widget::WhyItMatters => "why-it-matters",
            Widget::UnionBenefits => "union-benefits",
            Widget::Staffing => "staffing",
            Widget::Accordion => "accordion",
        }
    }
}

impl Deployment {
    pub fn includes(self, widget: Widget) -> bool {
        match self {
            Deployment::Full => true,
            Deployment::Core => matches!(
                widget,
                Widget::Navigation
                    | Widget::FooterYear
                    | Widget::Timeline
                    | Widget::Analysis
                    | Widget::Accordion
            ),
        }
    }

    /// Name used in `brief.toml`
    pub fn name(self) -> &'static str {
        match self {
            Deployment::Full => "full",
            Deployment::Core => "core",
        }
    }

    pub fn widgets(self) -> impl Iterator<Item = Widget> {
        Widget::ALL.into_iter().filter(move |w| self.includes(*w))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances
    pub interval_ms: u64,
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 8000 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a card that must be visible before it fades in
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Draw formatted values above the benefit chart bars
    pub value_labels: bool,
    pub label_color: String,
    pub label_font: String,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            value_labels: true,
            label_color: "#e2e8f0".to_string(),
            label_font: "600 12px Inter, sans-serif".to_string(),
        }
    }
}

impl BriefConfig {
    /// Load and validate a configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(BriefError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        let config: BriefConfig = toml::from_str(&content).map_err(|e| {
            BriefError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.interval_ms == 0 {
            return Err(BriefError::invalid_config(
                "carousel.interval_ms must be greater than zero",
            ));
        }
        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return Err(BriefError::invalid_config(format!(
                "reveal.threshold must be in (0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.site.title.trim().is_empty() {
            return Err(BriefError::invalid_config("site.title must not be empty"));
        }
        Ok(())
    }
}

/// Commented default `brief.toml`
pub fn generate_default_config_template() -> String {
    r##"# Louisville nurse organizing brief

[site]
title = "Louisville Nurses: The Long Road to a Union Contract"
# "full" ships every section; "core" ships timeline, analysis, FAQ,
# navigation and footer only
deployment = "full"

[carousel]
# Milliseconds between automatic testimonial advances
interval_ms = 8000

[reveal]
# Fraction of a card that must be on screen before it fades in
threshold = 0.3

[charts]
# Draw formatted values above each benefit chart bar
value_labels = true
label_color = "#e2e8f0"
label_font = "600 12px Inter, sans-serif"
"##
    .to_string()
}

/// Write the default template unless a file already exists at `path`
pub fn ensure_config_file_exists<P: AsRef<Path>>(path: P, overwrite: bool) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() && !overwrite {
        return Ok(false);
    }
    std::fs::write(path, generate_default_config_template())?;
    Ok(true)
}
