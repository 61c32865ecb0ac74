//! Static page generation for the nurse union brief.
//!
//! The page is assembled on a [`MemoryPage`], the same controllers that run
//! in the browser fill in their default state, and the result is serialized
//! into a single HTML document.

pub mod components;
pub mod contract;
pub mod template;
mod tree;

use brief::charts::{PluginGuard, RecordingCharts};
use brief::config::{BriefConfig, Widget};
use brief::dom::{MemoryPage, NodeId, Page};
use brief::markup::classes;
use brief::schedule::ManualScheduler;
use brief::{Brief, Result};
use chrono::{DateTime, Datelike, Local};
use components::HtmlComponents;
use template::HtmlTemplate;
use tracing::{debug, info};

pub use contract::{check_contract, ContractIssue};

/// Build information stamped into the generated document
#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub generated: DateTime<Local>,
    /// Year shown in the footer
    pub year: i32,
}

impl PageMetadata {
    pub fn now() -> Self {
        let generated = Local::now();
        Self {
            year: generated.year(),
            generated,
        }
    }

    /// Fixed footer year, used for reproducible output
    pub fn for_year(year: i32) -> Self {
        Self {
            generated: Local::now(),
            year,
        }
    }
}

/// Assemble the page body for a configuration. Sections the deployment
/// leaves out are not emitted at all.
pub fn mount(config: &BriefConfig) -> (MemoryPage, NodeId) {
    let deployment = config.site.deployment;
    let title = config.site.title.as_str();

    let mut page = MemoryPage::new();
    let body = page.append_element(None, "body");
    page.set_attribute(&body, "class", "bg-night text-slate-100 antialiased");

    HtmlComponents::navigation(&mut page, body, title, deployment);

    let main = page.append_element(Some(body), "main");
    HtmlComponents::hero(&mut page, main, title);

    let sections: [(Widget, fn(&mut MemoryPage, NodeId)); 8] = [
        (Widget::Timeline, HtmlComponents::timeline),
        (Widget::Analysis, HtmlComponents::analysis),
        (Widget::Outcomes, HtmlComponents::outcomes),
        (Widget::Voices, HtmlComponents::voices),
        (Widget::WhyItMatters, HtmlComponents::why_it_matters),
        (Widget::UnionBenefits, HtmlComponents::union_benefits),
        (Widget::Staffing, HtmlComponents::staffing),
        (Widget::Accordion, HtmlComponents::faq),
    ];
    for (widget, build) in sections {
        if deployment.includes(widget) {
            debug!("Mounting {} section", widget.name());
            build(&mut page, main);
        }
    }

    HtmlComponents::footer(&mut page, body, title);
    (page, body)
}

/// Mount the page, run every controller once so the initial selections are
/// baked into the markup, and wrap it in the document template.
pub fn prerender(config: &BriefConfig, metadata: &PageMetadata) -> Result<String> {
    config.validate()?;
    let page = settle(config, metadata.year);
    HtmlTemplate::new().render(config, metadata, &page.to_html())
}

/// Run the controllers headless. Cards primed for the fade-in are put back
/// to their visible state: only the browser runtime may hide them.
fn settle(config: &BriefConfig, year: i32) -> MemoryPage {
    let (mut page, _) = mount(config);
    let guard = PluginGuard::new();
    let brief = Brief::init_with_guard(
        &mut page,
        &mut ManualScheduler::new(),
        &mut RecordingCharts::new(),
        config,
        year,
        &guard,
    );

    let cards = brief.observations();
    for card in &cards {
        page.set_class(card, classes::FADE_CARD, false);
    }
    debug!("Left {} reveal cards visible", cards.len());
    info!(
        "Prerendered {} deployment with {} active widgets",
        config.site.deployment.name(),
        brief.active_widgets().len()
    );
    page
}
