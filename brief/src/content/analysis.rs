//! Anti-union tactics shown on the analysis chart and its detail panel.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisDetail {
    /// Chart category label, also the lookup key
    pub label: &'static str,
    /// Relative impact on a 0-10 scale, plotted as the bar length
    pub impact: f64,
    /// Bar fill color
    pub color: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static ANALYSIS: &[AnalysisDetail] = &[
    AnalysisDetail {
        label: "Delay & Decay Appeals",
        impact: 10.0,
        color: "rgba(15, 118, 110, 0.75)",
        title: "Management's \"delay & decay\" appeals",
        body: "Norton Healthcare appealed the NLRB's bargaining order for nine years. The drawn-out legal strategy relied on high nurse turnover to erode the union majority. Organizers must plan for this on day one: maintain majority sign-up campaigns and align public pressure with legal milestones.",
    },
    AnalysisDetail {
        label: "Illegal Firings & Retaliation",
        impact: 8.0,
        color: "rgba(14, 165, 233, 0.7)",
        title: "Illegal firings & retaliation",
        body: "Firing high-profile leaders chilled support, even when nurses later won reinstatement. Use rapid legal response, public storytelling, and hardship funds so management's retaliation backfires and galvanizes solidarity.",
    },
    AnalysisDetail {
        label: "Captive Audience Messaging",
        impact: 7.0,
        color: "rgba(234, 179, 8, 0.75)",
        title: "Captive-audience propaganda",
        body: "Mandatory anti-union meetings framed the union as an outside \"third party.\" Counter with inoculation conversations, visible majority actions, and a public plan that keeps patients and community leaders on the nurses' side.",
    },
    AnalysisDetail {
        label: "Political Climate",
        impact: 5.0,
        color: "rgba(148, 163, 184, 0.7)",
        title: "Right-to-work & political headwinds",
        body: "Kentucky's right-to-work laws and anti-labor climate emboldened the hospital. Organizers must leverage city officials, faith leaders, and patient advocates to shift the narrative to safe staffing and retention issues that resonate across party lines.",
    },
];

/// Category shown before the reader clicks a bar
pub const DEFAULT_ANALYSIS: &str = "Delay & Decay Appeals";

pub fn find(label: &str) -> Option<&'static AnalysisDetail> {
    ANALYSIS.iter().find(|detail| detail.label == label)
}

/// Detail behind the bar at `index` in chart order
pub fn at(index: usize) -> Option<&'static AnalysisDetail> {
    ANALYSIS.get(index)
}
