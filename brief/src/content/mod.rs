//! Static content tables behind every interactive section of the brief.
//!
//! Everything here is `'static` and read-only. Controllers only ever
//! *select* a record; nothing is created or mutated at runtime.

pub mod analysis;
pub mod benefits;
pub mod outcomes;
pub mod staffing;
pub mod timeline;
pub mod validate;
pub mod voices;

pub use analysis::{AnalysisDetail, ANALYSIS};
pub use benefits::{BenefitPalette, ChartSeriesConfig, BENEFIT_CHARTS, PALETTE};
pub use outcomes::{OutcomeMetric, OUTCOMES};
pub use staffing::{StaffingUnit, STAFFING};
pub use timeline::{TimelineEntry, TIMELINE};
pub use validate::{validate, ContentIssue};
pub use voices::{VoiceEntry, VOICES};

use crate::error::{BriefError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named content table, used to export a single table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Timeline,
    Analysis,
    Outcomes,
    Voices,
    Staffing,
    Benefits,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Timeline,
        Section::Analysis,
        Section::Outcomes,
        Section::Voices,
        Section::Staffing,
        Section::Benefits,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Timeline => "timeline",
            Section::Analysis => "analysis",
            Section::Outcomes => "outcomes",
            Section::Voices => "voices",
            Section::Staffing => "staffing",
            Section::Benefits => "benefits",
        }
    }

    /// Number of records in the table
    pub fn len(self) -> usize {
        match self {
            Section::Timeline => TIMELINE.len(),
            Section::Analysis => ANALYSIS.len(),
            Section::Outcomes => OUTCOMES.len(),
            Section::Voices => VOICES.len(),
            Section::Staffing => STAFFING.len(),
            Section::Benefits => BENEFIT_CHARTS.len(),
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Serialize this table alone as pretty JSON
    pub fn to_json(self) -> Result<String> {
        let json = match self {
            Section::Timeline => serde_json::to_string_pretty(TIMELINE)?,
            Section::Analysis => serde_json::to_string_pretty(ANALYSIS)?,
            Section::Outcomes => serde_json::to_string_pretty(OUTCOMES)?,
            Section::Voices => serde_json::to_string_pretty(VOICES)?,
            Section::Staffing => serde_json::to_string_pretty(STAFFING)?,
            Section::Benefits => serde_json::to_string_pretty(BENEFIT_CHARTS)?,
        };
        Ok(json)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = BriefError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| BriefError::UnknownSection {
                name: s.to_string(),
                available: Section::ALL
                    .iter()
                    .map(|section| section.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Every table in one serializable value, written next to the page as `content.json`
#[derive(Debug, Serialize)]
pub struct ContentSnapshot {
    pub timeline: &'static [TimelineEntry],
    pub analysis: &'static [AnalysisDetail],
    pub outcomes: &'static [OutcomeMetric],
    pub voices: &'static [VoiceEntry],
    pub staffing: &'static [StaffingUnit],
    pub benefits: &'static [ChartSeriesConfig],
    pub palette: &'static BenefitPalette,
}

impl ContentSnapshot {
    pub fn new() -> Self {
        Self {
            timeline: TIMELINE,
            analysis: ANALYSIS,
            outcomes: OUTCOMES,
            voices: VOICES,
            staffing: STAFFING,
            benefits: BENEFIT_CHARTS,
            palette: &PALETTE,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ContentSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
