use crate::error::{CliError, Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use brief::config::{BriefConfig, DEFAULT_CONFIG_FILE};
use brief::content::{validate, ContentSnapshot};
use brief_site::template::WASM_ENTRY;
use brief_site::{check_contract, mount, prerender, PageMetadata};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const STEPS: &[&str] = &[
    "Loading configuration",
    "Validating content",
    "Checking page markup",
    "Rendering page",
    "Writing output",
];

/// Files produced by one build
#[derive(Debug)]
pub struct BuildOutput {
    pub page: PathBuf,
    pub content: PathBuf,
    /// Whether the wasm runtime the page imports is already in place
    pub runtime: bool,
}

pub fn execute(out: PathBuf, config: Option<PathBuf>, year: Option<i32>, verbose: bool) -> Result<()> {
    let mut progress = ProgressTracker::new("Building brief").with_steps(STEPS);

    progress.start_step();
    let config = load_config(config.as_deref())?;
    if verbose {
        ui::info_message(&format!(
            "Deployment: {}, carousel every {} ms",
            config.site.deployment.name(),
            config.carousel.interval_ms
        ));
    }
    progress.complete_step();

    let metadata = match year {
        Some(year) => PageMetadata::for_year(year),
        None => PageMetadata::now(),
    };
    let output = build(&out, &config, &metadata, &mut progress)?;

    ui::file_written(&output.page, fs::metadata(&output.page)?.len() as usize);
    ui::file_written(&output.content, fs::metadata(&output.content)?.len() as usize);
    progress.complete();
    Ok(())
}

/// Load `path` when given, otherwise `brief.toml` in the working directory
/// if it exists, otherwise the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<BriefConfig> {
    let config = match path {
        Some(path) => BriefConfig::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => BriefConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
    };
    debug!(?config, "Configuration loaded");
    Ok(config)
}

fn build(
    out: &Path,
    config: &BriefConfig,
    metadata: &PageMetadata,
    progress: &mut ProgressTracker,
) -> Result<BuildOutput> {
    progress.start_step();
    let content_issues = validate();
    if !content_issues.is_empty() {
        for issue in &content_issues {
            ui::error_message(&issue.to_string());
        }
        return Err(CliError::CheckFailed(content_issues.len()));
    }
    progress.complete_step();

    progress.start_step();
    let (page, _) = mount(config);
    let contract_issues = check_contract(&page, config.site.deployment);
    if !contract_issues.is_empty() {
        for issue in &contract_issues {
            ui::error_message(&issue.to_string());
        }
        return Err(CliError::CheckFailed(contract_issues.len()));
    }
    progress.complete_step();

    progress.start_step();
    let html = prerender(config, metadata)?;
    let content = ContentSnapshot::new().to_json()?;
    progress.complete_step();

    progress.start_step();
    if out.exists() && !out.is_dir() {
        return Err(CliError::NotADirectory(out.to_path_buf()));
    }
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let output = BuildOutput {
        page: out.join("index.html"),
        content: out.join("content.json"),
        runtime: out.join(WASM_ENTRY.trim_start_matches("./")).is_file(),
    };
    fs::write(&output.page, html)?;
    fs::write(&output.content, content)?;
    if output.runtime {
        progress.complete_step();
    } else {
        progress.warn_step(&format!(
            "{WASM_ENTRY} not found, the page stays static. Run `wasm-pack build brief --target web --features web --out-dir {}`",
            out.join("pkg").display()
        ));
    }

    Ok(output)
}
