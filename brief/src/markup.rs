//! Element ids, classes and data attributes the controllers look for.
//!
//! The page generator and the controllers both read these names, so the
//! host page and the behavior cannot drift apart.

use crate::config::Widget;

pub mod ids {
    pub const YEAR: &str = "year";
    /// `<script type="application/json">` carrying the page's `BriefConfig`
    pub const CONFIG: &str = "brief-config";

    pub const TIMELINE_YEAR: &str = "timeline-year";
    pub const TIMELINE_TAGLINE: &str = "timeline-tagline";
    pub const TIMELINE_TITLE: &str = "timeline-title";
    pub const TIMELINE_SUMMARY: &str = "timeline-summary";
    pub const TIMELINE_BODY: &str = "timeline-body";

    pub const ANALYSIS_CHART: &str = "analysisChart";
    pub const ANALYSIS_TITLE: &str = "analysis-title";
    pub const ANALYSIS_BODY: &str = "analysis-body";

    pub const OUTCOME_TITLE: &str = "outcome-title";
    pub const OUTCOME_DESCRIPTION: &str = "outcome-description";
    pub const OUTCOME_UNION_VALUE: &str = "outcome-union-value";
    pub const OUTCOME_NONUNION_VALUE: &str = "outcome-nonunion-value";
    pub const OUTCOME_UNION_BAR: &str = "outcome-union-bar";
    pub const OUTCOME_NONUNION_BAR: &str = "outcome-nonunion-bar";
    pub const OUTCOME_FOOTNOTE: &str = "outcome-footnote";
    pub const OUTCOME_TAKEAWAY: &str = "outcome-takeaway";

    pub const VOICE_QUOTE: &str = "voice-quote";
    pub const VOICE_NAME: &str = "voice-name";
    pub const VOICE_ROLE: &str = "voice-role";

    pub const WHY_IT_MATTERS: &str = "why-it-matters";
    pub const UNION_BENEFITS: &str = "union-benefits";

    pub const CALCULATOR_UNIT: &str = "calculator-unit";
    pub const CALC_RECOMMENDED: &str = "calc-recommended";
    pub const CALC_CURRENT: &str = "calc-current";
    pub const CALC_GAP_LABEL: &str = "calc-gap-label";
    pub const CALC_GAP_BAR: &str = "calc-gap-bar";
    pub const CALC_MESSAGE: &str = "calc-message";
    pub const CALC_ACTION: &str = "calc-action";
}

pub mod attrs {
    pub const MENU_TOGGLE: &str = "data-menu-toggle";
    pub const MOBILE_MENU: &str = "data-mobile-menu";
    pub const TIMELINE: &str = "data-timeline";
    pub const ACTIVE: &str = "data-active";
    pub const OUTCOME: &str = "data-outcome";
    pub const DIRECTION: &str = "data-direction";
    pub const INDEX: &str = "data-index";
    pub const WHY_CARD: &str = "data-why-card";
    pub const WHY_TRIGGER: &str = "data-why-trigger";
    pub const WHY_ICON: &str = "data-why-icon";
    pub const BENEFIT_CARD: &str = "data-benefit-card";
    pub const BENEFIT_LABEL: &str = "data-union-benefit-label";
    pub const ACCORDION_TRIGGER: &str = "data-accordion-trigger";
    pub const ACCORDION_ICON: &str = "data-accordion-icon";
    pub const ARIA_CONTROLS: &str = "aria-controls";
    pub const ARIA_EXPANDED: &str = "aria-expanded";
    pub const ARIA_HIDDEN: &str = "aria-hidden";
    pub const ARIA_SELECTED: &str = "aria-selected";
}

pub mod classes {
    pub const HIDDEN: &str = "hidden";
    pub const ROTATED: &str = "rotate-180";
    pub const FADE_CARD: &str = "fade-card";
    pub const VISIBLE: &str = "is-visible";
    pub const OUTCOME_TAB: &str = "outcome-tab";
    pub const VOICE_NAV: &str = "voice-nav";
    pub const VOICE_INDICATOR: &str = "voice-indicator";
    pub const INDICATOR_ON: &str = "bg-brand-light";
    pub const INDICATOR_OFF: &str = "bg-slate-600";
    pub const TAB_ON: &[&str] = &["border-brand/40", "text-brand-light"];
    pub const TAB_OFF: &[&str] = &["border-white/20", "text-slate-300"];
}

/// Ids a widget cannot work without. A missing one leaves the widget inert.
pub fn required_ids(widget: Widget) -> &'static [&'static str] {
    use ids::*;
    match widget {
        Widget::Navigation | Widget::Accordion => &[],
        Widget::FooterYear => &[YEAR],
        Widget::Timeline => &[
            TIMELINE_YEAR,
            TIMELINE_TAGLINE,
            TIMELINE_TITLE,
            TIMELINE_SUMMARY,
            TIMELINE_BODY,
        ],
        Widget::Analysis => &[ANALYSIS_CHART, ANALYSIS_TITLE, ANALYSIS_BODY],
        Widget::Outcomes => &[
            OUTCOME_TITLE,
            OUTCOME_DESCRIPTION,
            OUTCOME_UNION_VALUE,
            OUTCOME_NONUNION_VALUE,
            OUTCOME_UNION_BAR,
            OUTCOME_NONUNION_BAR,
            OUTCOME_FOOTNOTE,
            OUTCOME_TAKEAWAY,
        ],
        Widget::Voices => &[VOICE_QUOTE, VOICE_NAME, VOICE_ROLE],
        Widget::WhyItMatters => &[WHY_IT_MATTERS],
        Widget::UnionBenefits => &[UNION_BENEFITS],
        Widget::Staffing => &[
            CALCULATOR_UNIT,
            CALC_RECOMMENDED,
            CALC_CURRENT,
            CALC_GAP_LABEL,
            CALC_GAP_BAR,
            CALC_MESSAGE,
            CALC_ACTION,
        ],
    }
}
