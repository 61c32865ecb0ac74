use brief::charts::RecordingCharts;
use brief::config::{BriefConfig, Deployment, Widget};
use brief::content::validate;
use brief::dom::{Page, Selector};
use brief::markup::{attrs, ids};
use brief_site::{check_contract, mount, prerender, PageMetadata};
use brief_tests::Harness;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_target_leaves_only_that_section_inert() {
    let config = BriefConfig::default();
    let (mut page, body) = mount(&config);
    let title = page.element_by_id(ids::TIMELINE_TITLE).unwrap();
    page.remove(title);
    let mut h = Harness::start(page, body, RecordingCharts::new(), &config);

    assert!(h.brief.timeline().is_none());
    assert!(!h.brief.is_active(Widget::Timeline));
    let year_before = h.text_of(ids::TIMELINE_YEAR);
    let trigger = h.find(&Selector::attr_eq(attrs::TIMELINE, "2004"));
    h.click(trigger);
    assert_eq!(h.text_of(ids::TIMELINE_YEAR), year_before);

    let tab = h.find(&Selector::attr_eq(attrs::OUTCOME, "safety"));
    h.click(tab);
    assert_eq!(h.brief.outcomes().and_then(|o| o.selected()), Some("safety"));
}

#[test]
fn missing_chart_library_keeps_the_rest_working() {
    let config = BriefConfig::default();
    let (page, body) = mount(&config);
    let mut h = Harness::start(page, body, RecordingCharts::unavailable(), &config);

    assert!(h.brief.analysis().is_none());
    assert!(h.brief.benefits().is_none());
    assert!(h.charts.charts.is_empty());
    assert!(h.charts.plugins.is_empty());

    let trigger = h.find(&Selector::attr_eq(attrs::TIMELINE, "2013"));
    h.click(trigger);
    assert_eq!(h.text_of(ids::TIMELINE_YEAR), "2010s");
}

#[test]
fn indicator_mismatch_disables_the_carousel() {
    let config = BriefConfig::default();
    let (mut page, body) = mount(&config);
    for dot in page.query_all(None, &Selector::Class(brief::markup::classes::VOICE_INDICATOR)) {
        page.remove(dot);
    }
    let h = Harness::start(page, body, RecordingCharts::new(), &config);

    assert!(h.brief.voices().is_none());
    assert_eq!(h.scheduler.active(), 0);
    assert!(h.brief.timeline().is_some());
}

#[test]
fn core_deployment_ships_fewer_widgets() {
    let mut config = BriefConfig::default();
    config.site.deployment = Deployment::Core;
    let h = Harness::new(&config);

    assert!(h.brief.is_active(Widget::Timeline));
    assert!(h.brief.is_active(Widget::Analysis));
    assert!(h.brief.is_active(Widget::Accordion));
    assert!(!h.brief.is_active(Widget::Voices));
    assert!(!h.brief.is_active(Widget::Staffing));
    assert!(h.brief.observations().is_empty());
    assert_eq!(h.scheduler.active(), 0);
}

#[test]
fn shipped_content_and_markup_are_consistent() {
    assert!(validate().is_empty(), "{:?}", validate());

    for deployment in [Deployment::Full, Deployment::Core] {
        let mut config = BriefConfig::default();
        config.site.deployment = deployment;
        let (page, _) = mount(&config);
        assert!(check_contract(&page, deployment).is_empty());
    }
}

#[test]
fn prerendered_page_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index.html");
    let mut config = BriefConfig::default();
    config.site.title = "Nurses <United>".to_string();

    let html = prerender(&config, &PageMetadata::for_year(2025)).unwrap();
    fs::write(&path, &html).unwrap();
    let written = fs::read_to_string(&path).unwrap();

    assert!(written.contains("<title>Nurses &lt;United&gt;</title>"));
    assert!(written.contains(r#"<span id="year">2025</span>"#));

    let start = written.find(r#"id="brief-config">"#).unwrap() + r#"id="brief-config">"#.len();
    let end = start + written[start..].find("</script>").unwrap();
    let embedded: BriefConfig = serde_json::from_str(&written[start..end]).unwrap();
    assert_eq!(embedded, config);
}
