//! Campaign timeline, keyed by the year carried on each timeline trigger.

use serde::Serialize;

/// A single stop on the campaign timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// Lookup key carried by the trigger's `data-timeline` attribute
    pub key: &'static str,
    /// Year shown to the reader (may be a decade such as `2010s`)
    pub year: &'static str,
    pub tagline: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

pub static TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        key: "1989",
        year: "1989",
        tagline: "Organizing takes root",
        title: "Nurses Professional Organization launches",
        summary: "Registered nurses file with the National Labor Relations Board after organizing on staffing, unsafe floating, and wage compression.",
        body: "Humana's Audubon Hospital management floods the units with consultants and mandatory meetings, but nurses build super-majority support across critical care and med-surg. The election narrowly falls short, yet the organizing committee commits to keep fighting for a binding agreement.",
    },
    TimelineEntry {
        key: "1994",
        year: "1994",
        tagline: "Legal validation",
        title: "Election overturned by the NLRB",
        summary: "After Columbia/HCA acquires Audubon, management intensifies captive-audience meetings and intimidation. The NPO contests the election results.",
        body: "The NLRB agrees that management broke labor law and throws out the election, issuing a rare bargaining order. Nurses win on paper, proving the hospital interfered, but securing a contract still requires public pressure and unity on the units.",
    },
    TimelineEntry {
        key: "1998",
        year: "1998",
        tagline: "Delay begins",
        title: "Norton buys Audubon and refuses to bargain",
        summary: "Norton Healthcare inherits the bargaining order but refuses to negotiate, launching a legal strategy to stall until the committee turns over.",
        body: "For the next nine years, Norton appeals every ruling up to the Sixth Circuit Court of Appeals. During the delay, management hires union-busting consultants, reassigns pro-union charge nurses, and recruits new staff with anti-union messaging.",
    },
    TimelineEntry {
        key: "2004",
        year: "2004",
        tagline: "Courage under fire",
        title: "Jane Gentry wins reinstatement",
        summary: "Critical care nurse Jane Gentry is fired after speaking publicly for the union. The case becomes a symbol of management intimidation.",
        body: "The NLRB orders Norton to reinstate Gentry with back pay, one of several unfair labor practice victories totaling over $570,000 in settlements. The win exposes management's tactics, but without a rapid offensive, the timeline continues to stretch.",
    },
    TimelineEntry {
        key: "2013",
        year: "2010s",
        tagline: "Momentum shifts",
        title: "New networks organize across Louisville",
        summary: "United Campus Workers of Kentucky and other coalitions organize public-sector nurses, residents, and allied health professionals.",
        body: "These campaigns reintroduce union language into Louisville hospitals. They perfect rapid-response communications, majority petitions, and community alliances. Those tools are essential for private hospital drives ready to relaunch.",
    },
    TimelineEntry {
        key: "2023",
        year: "2020s",
        tagline: "A renewed mandate",
        title: "Safe staffing drives the next wave",
        summary: "Pandemic staffing crises, record profits, and rising agency costs have galvanized a new generation of nurse leaders.",
        body: "Nurses are coordinating across hospital systems, documenting unsafe ratios, and building majority committees with digital tools. The focus: go public with overwhelming support, secure rapid elections, and bargain enforceable staffing ratios.",
    },
];

/// Look up a timeline entry by trigger key
pub fn find(key: &str) -> Option<&'static TimelineEntry> {
    TIMELINE.iter().find(|entry| entry.key == key)
}
