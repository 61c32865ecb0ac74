//! Page sections. Each builder appends one section's markup, carrying every
//! id, class and data attribute its controller looks for.

use crate::tree::{el, slot, text};
use brief::config::{Deployment, Widget};
use brief::content::{BENEFIT_CHARTS, OUTCOMES, STAFFING, TIMELINE, VOICES};
use brief::dom::{MemoryPage, NodeId};
use brief::markup::{attrs, classes, ids};

const SECTION: &str = "mx-auto max-w-6xl px-6 py-20";
const HEADING: &str = "text-3xl font-semibold text-white";
const LEAD: &str = "mt-4 max-w-3xl text-slate-300";
const CARD: &str = "rounded-3xl border border-white/10 bg-white/5 p-6 shadow-glow";

/// Why-it-matters explainers: `(card title, teaser, panel body)`
const WHY_CARDS: &[(&str, &str, &str)] = &[
    (
        "Safe staffing saves lives",
        "Every extra patient per nurse raises the odds of a preventable death.",
        "Enforceable ratios in a contract turn staffing from a budget line into a patient right. Nurses gain the standing to refuse unsafe assignments without retaliation.",
    ),
    (
        "Retention keeps expertise at the bedside",
        "Turnover drains the experienced nurses new graduates learn from.",
        "Union hospitals hold turnover far lower by locking in fair pay steps, due process and a voice on scheduling, so units keep their most skilled caregivers.",
    ),
    (
        "A contract is enforceable",
        "Promises from management can be withdrawn; a contract cannot.",
        "Grievance procedures and arbitration give nurses a binding path to fix violations instead of relying on goodwill that disappears with the next budget cycle.",
    ),
];

/// FAQ entries: `(question, answer)`
const FAQ: &[(&str, &str)] = &[
    (
        "Why did the first campaign take so long?",
        "Management used appeals and turnover to run out the clock. Nine years of litigation let the hospital replace many of the nurses who voted for the union.",
    ),
    (
        "Can nurses be fired for organizing?",
        "Retaliation is illegal under the National Labor Relations Act. Document everything, act together and report violations quickly so the remedy arrives while support is strong.",
    ),
    (
        "How does a union change staffing?",
        "A contract can set ratios, create a staffing committee with real authority and give nurses a grievance path when assignments exceed safe limits.",
    ),
    (
        "Who can join?",
        "Registered nurses at the facility form the bargaining unit. Community allies, patients and clergy support the campaign publicly.",
    ),
];

/// Reusable section builders for the brief page
pub struct HtmlComponents;

impl HtmlComponents {
    /// Top bar with the collapsible mobile menu
    pub fn navigation(page: &mut MemoryPage, body: NodeId, title: &str, deployment: Deployment) {
        let header = el(page, body, "header", &[("class", "sticky top-0 z-40 bg-night/90 backdrop-blur")]);
        let bar = el(page, header, "div", &[("class", "mx-auto flex max-w-6xl items-center justify-between px-6 py-4")]);
        text(page, bar, "a", &[("href", "#top"), ("class", "font-semibold text-brand-light")], title);
        let toggle = el(
            page,
            bar,
            "button",
            &[
                ("type", "button"),
                (attrs::MENU_TOGGLE, ""),
                (attrs::ARIA_EXPANDED, "false"),
                (attrs::ARIA_CONTROLS, "mobile-menu"),
                ("class", "md:hidden rounded-lg border border-white/20 px-3 py-2 text-slate-200"),
            ],
        );
        text(page, toggle, "span", &[("class", "sr-only")], "Toggle navigation");
        text(page, toggle, "span", &[("aria-hidden", "true")], "\u{2630}");

        let menu = el(
            page,
            header,
            "nav",
            &[
                ("id", "mobile-menu"),
                (attrs::MOBILE_MENU, ""),
                ("class", "hidden md:block border-t border-white/10 px-6 py-3"),
            ],
        );
        let list = el(page, menu, "ul", &[("class", "flex flex-col gap-3 md:flex-row md:gap-6")]);
        let links = [
            ("#timeline", "Timeline", Widget::Timeline),
            ("#analysis", "Analysis", Widget::Analysis),
            ("#outcomes", "Outcomes", Widget::Outcomes),
            ("#voices", "Voices", Widget::Voices),
            ("#union-benefits", "Benefits", Widget::UnionBenefits),
            ("#calculator", "Staffing", Widget::Staffing),
            ("#faq", "FAQ", Widget::Accordion),
        ];
        for (href, label, _) in links.into_iter().filter(|(_, _, w)| deployment.includes(*w)) {
            let item = el(page, list, "li", &[]);
            text(page, item, "a", &[("href", href), ("class", "text-slate-300 hover:text-brand-light")], label);
        }
    }

    pub fn hero(page: &mut MemoryPage, main: NodeId, title: &str) {
        let section = el(page, main, "section", &[("id", "top"), ("class", SECTION)]);
        text(page, section, "p", &[("class", "uppercase tracking-widest text-brand-light")], "Louisville, Kentucky");
        text(page, section, "h1", &[("class", "mt-4 text-5xl font-bold text-white")], title);
        text(
            page,
            section,
            "p",
            &[("class", LEAD)],
            "Three decades of nurse organizing at Audubon Hospital: what happened, why the first contract slipped away, and what it takes to win one now.",
        );
    }

    /// Year buttons plus the detail card they drive
    pub fn timeline(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", "timeline"), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "The road to a contract");

        let rail = el(page, section, "div", &[("class", "mt-8 flex flex-wrap gap-3"), ("role", "tablist")]);
        for entry in TIMELINE {
            text(
                page,
                rail,
                "button",
                &[
                    ("type", "button"),
                    (attrs::TIMELINE, entry.key),
                    (attrs::ACTIVE, "false"),
                    ("class", "rounded-full border border-white/20 px-4 py-2 text-sm text-slate-200 data-[active=true]:bg-brand data-[active=true]:text-white"),
                ],
                entry.year,
            );
        }

        let card = el(page, section, "article", &[("class", format!("mt-8 {CARD}").as_str())]);
        slot(page, card, "p", ids::TIMELINE_YEAR, "text-sm font-semibold text-brand-light");
        slot(page, card, "p", ids::TIMELINE_TAGLINE, "mt-1 uppercase tracking-wide text-slate-400");
        slot(page, card, "h3", ids::TIMELINE_TITLE, "mt-3 text-2xl font-semibold text-white");
        slot(page, card, "p", ids::TIMELINE_SUMMARY, "mt-3 text-slate-200");
        slot(page, card, "p", ids::TIMELINE_BODY, "mt-3 text-slate-400");
    }

    /// Tactic impact chart and the detail it selects
    pub fn analysis(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", "analysis"), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "How management stalled the contract");
        text(page, section, "p", &[("class", LEAD)], "Click a bar to see how each tactic worked and how organizers can answer it.");

        let grid = el(page, section, "div", &[("class", "mt-8 grid gap-6 lg:grid-cols-2")]);
        let frame = el(page, grid, "div", &[("class", format!("h-80 {CARD}").as_str())]);
        el(
            page,
            frame,
            "canvas",
            &[("id", ids::ANALYSIS_CHART), ("aria-label", "Impact of anti-union tactics")],
        );
        let detail = el(page, grid, "article", &[("class", CARD)]);
        slot(page, detail, "h3", ids::ANALYSIS_TITLE, "text-xl font-semibold text-white");
        slot(page, detail, "p", ids::ANALYSIS_BODY, "mt-3 text-slate-300");
    }

    /// Outcome tabs with two comparison bars
    pub fn outcomes(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", "outcomes"), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "Union vs non-union outcomes");

        let tabs = el(page, section, "div", &[("class", "mt-8 flex flex-wrap gap-3"), ("role", "tablist")]);
        for metric in OUTCOMES {
            text(
                page,
                tabs,
                "button",
                &[
                    ("type", "button"),
                    ("role", "tab"),
                    (attrs::OUTCOME, metric.key),
                    (attrs::ARIA_SELECTED, "false"),
                    ("class", format!("{} rounded-full border px-4 py-2 text-sm border-white/20 text-slate-300", classes::OUTCOME_TAB).as_str()),
                ],
                metric.title,
            );
        }

        let card = el(page, section, "article", &[("class", format!("mt-8 {CARD}").as_str()), ("role", "tabpanel")]);
        slot(page, card, "h3", ids::OUTCOME_TITLE, "text-2xl font-semibold text-white");
        slot(page, card, "p", ids::OUTCOME_DESCRIPTION, "mt-3 text-slate-300");
        for (label, value_id, bar_id, fill) in [
            ("Union", ids::OUTCOME_UNION_VALUE, ids::OUTCOME_UNION_BAR, "bg-brand-light"),
            ("Non-union", ids::OUTCOME_NONUNION_VALUE, ids::OUTCOME_NONUNION_BAR, "bg-amber-400"),
        ] {
            let row = el(page, card, "div", &[("class", "mt-6")]);
            let legend = el(page, row, "div", &[("class", "flex justify-between text-sm text-slate-300")]);
            text(page, legend, "span", &[], label);
            slot(page, legend, "span", value_id, "font-semibold text-white");
            let track = el(page, row, "div", &[("class", "mt-2 h-3 rounded-full bg-white/10")]);
            slot(page, track, "div", bar_id, &format!("h-3 rounded-full {fill} transition-all"));
        }
        slot(page, card, "p", ids::OUTCOME_FOOTNOTE, "mt-6 text-xs text-slate-500");
        slot(page, card, "p", ids::OUTCOME_TAKEAWAY, "mt-3 font-medium text-brand-light");
    }

    /// Testimonial carousel with prev/next and one indicator per voice
    pub fn voices(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", "voices"), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "Voices from Louisville");

        let card = el(page, section, "figure", &[("class", format!("mt-8 {CARD}").as_str()), ("aria-live", "polite")]);
        slot(page, card, "blockquote", ids::VOICE_QUOTE, "text-xl italic text-slate-100");
        let caption = el(page, card, "figcaption", &[("class", "mt-4")]);
        slot(page, caption, "p", ids::VOICE_NAME, "font-semibold text-white");
        slot(page, caption, "p", ids::VOICE_ROLE, "text-sm text-slate-400");

        let controls = el(page, section, "div", &[("class", "mt-6 flex items-center gap-4")]);
        text(
            page,
            controls,
            "button",
            &[
                ("type", "button"),
                (attrs::DIRECTION, "prev"),
                ("aria-label", "Previous voice"),
                ("class", format!("{} rounded-full border border-white/20 px-3 py-1", classes::VOICE_NAV).as_str()),
            ],
            "\u{2190}",
        );
        let dots = el(page, controls, "div", &[("class", "flex gap-2")]);
        for index in 0..VOICES.len() {
            el(
                page,
                dots,
                "span",
                &[
                    (attrs::INDEX, index.to_string().as_str()),
                    ("class", format!("{} h-2 w-6 rounded-full {}", classes::VOICE_INDICATOR, classes::INDICATOR_OFF).as_str()),
                ],
            );
        }
        text(
            page,
            controls,
            "button",
            &[
                ("type", "button"),
                (attrs::DIRECTION, "next"),
                ("aria-label", "Next voice"),
                ("class", format!("{} rounded-full border border-white/20 px-3 py-1", classes::VOICE_NAV).as_str()),
            ],
            "\u{2192}",
        );
    }

    /// Fading explainer cards, each with a keyboard-accessible panel
    pub fn why_it_matters(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", ids::WHY_IT_MATTERS), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "Why it matters");

        let grid = el(page, section, "div", &[("class", "mt-8 grid gap-6 md:grid-cols-3")]);
        for (index, (title, teaser, detail)) in WHY_CARDS.iter().enumerate() {
            let panel_id = format!("why-panel-{}", index + 1);
            let card = el(page, grid, "article", &[(attrs::WHY_CARD, ""), ("class", CARD)]);
            text(page, card, "h3", &[("class", "text-lg font-semibold text-white")], title);
            text(page, card, "p", &[("class", "mt-2 text-slate-300")], teaser);
            let trigger = el(
                page,
                card,
                "button",
                &[
                    ("type", "button"),
                    (attrs::WHY_TRIGGER, ""),
                    (attrs::ARIA_EXPANDED, "false"),
                    (attrs::ARIA_CONTROLS, panel_id.as_str()),
                    ("class", "mt-4 flex items-center gap-2 text-sm text-brand-light"),
                ],
            );
            text(page, trigger, "span", &[], "Read more");
            text(page, trigger, "span", &[(attrs::WHY_ICON, ""), ("class", "transition-transform")], "\u{25be}");
            text(
                page,
                card,
                "p",
                &[("id", panel_id.as_str()), ("class", "mt-3 hidden text-sm text-slate-400"), (attrs::ARIA_HIDDEN, "true")],
                detail,
            );
        }
    }

    /// Comparison chart cards with mirrored value labels
    pub fn union_benefits(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", ids::UNION_BENEFITS), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "What a union contract delivers");

        let grid = el(page, section, "div", &[("class", "mt-8 grid gap-6 lg:grid-cols-3")]);
        for series in BENEFIT_CHARTS {
            let card = el(page, grid, "article", &[(attrs::BENEFIT_CARD, ""), ("class", CARD)]);
            text(page, card, "h3", &[("class", "text-lg font-semibold text-white")], series.label);
            let frame = el(page, card, "div", &[("class", "mt-4 h-56")]);
            el(page, frame, "canvas", &[("id", series.canvas_id), ("aria-label", series.label)]);
            let figures = el(page, card, "dl", &[("class", "mt-4 grid grid-cols-2 gap-2 text-sm")]);
            for (label, key) in [
                ("Union", series.union_label_key()),
                ("Non-union", series.non_union_label_key()),
            ] {
                text(page, figures, "dt", &[("class", "text-slate-400")], label);
                el(page, figures, "dd", &[(attrs::BENEFIT_LABEL, key.as_str()), ("class", "font-semibold text-white")]);
            }
        }
    }

    /// Unit select driving the ratio gap readout
    pub fn staffing(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", "calculator"), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "Staffing gap calculator");

        let card = el(page, section, "div", &[("class", format!("mt-8 {CARD}").as_str())]);
        text(page, card, "label", &[("for", ids::CALCULATOR_UNIT), ("class", "text-sm text-slate-300")], "Hospital unit");
        let select = el(
            page,
            card,
            "select",
            &[("id", ids::CALCULATOR_UNIT), ("class", "mt-2 w-full rounded-xl bg-night px-4 py-2 text-white")],
        );
        for unit in STAFFING {
            text(page, select, "option", &[("value", unit.key)], unit.name);
        }

        let readout = el(page, card, "dl", &[("class", "mt-6 grid grid-cols-2 gap-4")]);
        text(page, readout, "dt", &[("class", "text-slate-400")], "Recommended");
        slot(page, readout, "dd", ids::CALC_RECOMMENDED, "text-2xl font-semibold text-brand-light");
        text(page, readout, "dt", &[("class", "text-slate-400")], "Current");
        slot(page, readout, "dd", ids::CALC_CURRENT, "text-2xl font-semibold text-amber-300");

        slot(page, card, "p", ids::CALC_GAP_LABEL, "mt-6 text-sm text-slate-300");
        let track = el(page, card, "div", &[("class", "mt-2 h-3 rounded-full bg-white/10")]);
        slot(page, track, "div", ids::CALC_GAP_BAR, "h-3 rounded-full bg-rose-400 transition-all");
        slot(page, card, "p", ids::CALC_MESSAGE, "mt-6 text-slate-200");
        slot(page, card, "p", ids::CALC_ACTION, "mt-2 font-medium text-brand-light");
    }

    /// Pointer-only accordion
    pub fn faq(page: &mut MemoryPage, main: NodeId) {
        let section = el(page, main, "section", &[("id", "faq"), ("class", SECTION)]);
        text(page, section, "h2", &[("class", HEADING)], "Frequently asked questions");

        let list = el(page, section, "div", &[("class", "mt-8 divide-y divide-white/10")]);
        for (index, (question, answer)) in FAQ.iter().enumerate() {
            let panel_id = format!("faq-panel-{}", index + 1);
            let item = el(page, list, "div", &[("class", "py-4")]);
            let trigger = el(
                page,
                item,
                "button",
                &[
                    ("type", "button"),
                    (attrs::ACCORDION_TRIGGER, ""),
                    (attrs::ARIA_EXPANDED, "false"),
                    (attrs::ARIA_CONTROLS, panel_id.as_str()),
                    ("class", "flex w-full items-center justify-between text-left text-white"),
                ],
            );
            text(page, trigger, "span", &[], question);
            text(page, trigger, "span", &[(attrs::ACCORDION_ICON, ""), ("class", "transition-transform")], "\u{25be}");
            text(page, item, "p", &[("id", panel_id.as_str()), ("class", "mt-3 hidden text-slate-300")], answer);
        }
    }

    pub fn footer(page: &mut MemoryPage, body: NodeId, title: &str) {
        let footer = el(page, body, "footer", &[("class", "border-t border-white/10 py-8 text-center text-sm text-slate-500")]);
        let line = el(page, footer, "p", &[]);
        page.append_text(line, "\u{a9} ");
        slot(page, line, "span", ids::YEAR, "");
        page.append_text(line, &format!(" {title}"));
    }
}
