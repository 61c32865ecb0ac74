//! Document shell with embedded CSS for the self-contained brief page

use crate::PageMetadata;
use brief::config::BriefConfig;
use brief::dom::memory::escape_text;
use brief::markup::ids;
use brief::Result;

/// Chart.js build the analysis and benefit charts are drawn with
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Utility-class runtime for the page styling
pub const TAILWIND_URL: &str = "https://cdn.tailwindcss.com";

/// Glue module emitted by wasm-bindgen for the `brief` crate
pub const WASM_ENTRY: &str = "./pkg/brief.js";

/// HTML document generator for the brief
pub struct HtmlTemplate;

impl HtmlTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Wrap a serialized `<body>` into a complete document.
    ///
    /// The config travels as a JSON script so the wasm runtime reads the same
    /// tuning the page was rendered with.
    pub fn render(&self, config: &BriefConfig, metadata: &PageMetadata, body: &str) -> Result<String> {
        let config_json = Self::script_json(config)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="brief {version}">
    <meta name="generated" content="{generated}">
    <title>{title}</title>
    <meta name="description" content="How Louisville nurses organized, what the research says about union hospitals, and what a contract changes at the bedside.">
    <script src="{tailwind}"></script>
    <script>{theme}</script>
    <script src="{chart_js}"></script>
    <style>{css}</style>
    <script type="application/json" id="{config_id}">{config_json}</script>
</head>
{body}<script type="module">
    import init from "{wasm}";
    init();
</script>
</html>
"#,
            version = env!("CARGO_PKG_VERSION"),
            generated = metadata.generated.format("%Y-%m-%dT%H:%M:%S%:z"),
            title = escape_text(&config.site.title),
            tailwind = TAILWIND_URL,
            theme = Self::tailwind_theme(),
            chart_js = CHART_JS_URL,
            css = Self::embedded_css(),
            config_id = ids::CONFIG,
            config_json = config_json,
            body = body,
            wasm = WASM_ENTRY,
        ))
    }

    /// JSON safe to inline inside a `<script>` element
    fn script_json(config: &BriefConfig) -> Result<String> {
        let json = serde_json::to_string(config)?;
        Ok(json.replace("</", "<\\/"))
    }

    fn tailwind_theme() -> &'static str {
        r##"tailwind.config = {
        theme: {
            extend: {
                colors: {
                    night: "#0b1120",
                    brand: { DEFAULT: "#0ea5e9", light: "#7dd3fc" }
                },
                boxShadow: { glow: "0 20px 45px -20px rgba(14, 165, 233, 0.45)" }
            }
        }
    };"##
    }

    fn embedded_css() -> &'static str {
        r#"
        html { scroll-behavior: smooth; }
        body { background: #0b1120; color: #e2e8f0; }
        .hidden { display: none; }
        .rotate-180 { transform: rotate(180deg); }
        .fade-card {
            opacity: 0;
            transform: translateY(24px);
            transition: opacity 0.6s ease, transform 0.6s ease;
        }
        .fade-card.is-visible {
            opacity: 1;
            transform: none;
        }
        .voice-indicator { transition: background-color 0.3s ease; }
        @media (prefers-reduced-motion: reduce) {
            .fade-card { opacity: 1; transform: none; transition: none; }
        }
    "#
    }
}

impl Default for HtmlTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_json_cannot_close_the_script() {
        let mut config = BriefConfig::default();
        config.site.title = "Nurses </script><b>".to_string();

        let json = HtmlTemplate::script_json(&config).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains("<\\/script>"));
    }

    #[test]
    fn document_carries_scripts_and_escaped_title() {
        let mut config = BriefConfig::default();
        config.site.title = "Nurses & Allies".to_string();
        let html = HtmlTemplate::new()
            .render(&config, &PageMetadata::for_year(2024), "<body></body>\n")
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Nurses &amp; Allies</title>"));
        assert!(html.contains(CHART_JS_URL));
        assert!(html.contains(r#"id="brief-config""#));
        assert!(html.contains(WASM_ENTRY));
        assert!(html.contains(".fade-card.is-visible"));
    }
}
