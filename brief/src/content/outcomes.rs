//! Union vs non-union outcome metrics for the outcome explorer tabs.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeMetric {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub union_value: &'static str,
    pub non_union_value: &'static str,
    /// Bar fill for the union side, percent of track width
    pub union_bar: u8,
    /// Bar fill for the non-union side, percent of track width
    pub non_union_bar: u8,
    pub footnote: &'static str,
    pub takeaway: &'static str,
}

pub static OUTCOMES: &[OutcomeMetric] = &[
    OutcomeMetric {
        key: "retention",
        title: "Union hospitals keep nurses on the floor",
        description: "Louisville hospitals without contracts see roughly 25% RN turnover each year, burning out whole units. Union facilities hold that closer to 11% by locking in fair pay, staffing committees, and due process.",
        union_value: "Retention: 89%",
        non_union_value: "Retention: 62%",
        union_bar: 82,
        non_union_bar: 55,
        footnote: "Source: Louisville nurse organizer testimony, RegisteredNursing.org union vs non-union retention data.",
        takeaway: "When fewer nurses leave, patients see familiar faces, orientation costs drop, and units build the muscle to speak up about safety.",
    },
    OutcomeMetric {
        key: "safety",
        title: "Safe staffing cuts preventable harm",
        description: "Every extra Louisville patient assigned to a nurse increases mortality risk. Union contracts elsewhere enforce ratios like 1:4 on med-surg and 1:2 in ICU, and pair them with staffing committees that fix problems fast.",
        union_value: "Infection Index: 1.8",
        non_union_value: "Infection Index: 3.1",
        union_bar: 65,
        non_union_bar: 40,
        footnote: "Source: ILR Review unionization study; JAMA nurse staffing research; local incident reports.",
        takeaway: "Fewer infections, shorter ER boarding times, and better HCAHPS scores follow when ratios are enforceable.",
    },
    OutcomeMetric {
        key: "pay",
        title: "Union contracts deliver equitable pay scales",
        description: "Union nurses nationwide earn about 12% more per week and are far more likely to have employer-paid health coverage and pensions. Transparent wage steps keep Louisville nurses from leaving for travelers or other markets.",
        union_value: "Weekly pay avg: $1,165",
        non_union_value: "Weekly pay avg: $1,042",
        union_bar: 78,
        non_union_bar: 60,
        footnote: "Source: Economic Policy Institute (2024); AFL-CIO Department for Professional Employees.",
        takeaway: "Fair pay and benefits retain experienced preceptors and reduce costly reliance on travel nurses.",
    },
    OutcomeMetric {
        key: "voice",
        title: "A union protects the voice behind every safety report",
        description: "NLRB rulings show Norton disciplined and interrogated nurses for speaking up. Unionized hospitals negotiate whistleblower protections and grievance steps that shield staff when they escalate unsafe conditions.",
        union_value: "ULP settlements: $0",
        non_union_value: "ULP settlements: $570K+",
        union_bar: 90,
        non_union_bar: 30,
        footnote: "Source: NLRB case files; PNHP \u{201c}Silencing nurses endangers patients\u{2019} care.\u{201d}",
        takeaway: "A contract keeps management from silencing nurses, so patients hear the truth faster.",
    },
];

/// Tab selected when the explorer first renders
pub const DEFAULT_OUTCOME: &str = "retention";

pub fn find(key: &str) -> Option<&'static OutcomeMetric> {
    OUTCOMES.iter().find(|metric| metric.key == key)
}
