use crate::build::load_config;
use crate::error::{CliError, Result};
use crate::table::TableBuilder;
use crate::ui;
use brief::config::BriefConfig;
use brief::content::{validate, Section};
use brief_site::{check_contract, mount};
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = load_config(config.as_deref())?;

    ui::status_message("Checking content tables and page markup");
    if verbose {
        for section in Section::ALL {
            ui::info_message(&format!("{section}: {} records", section.len()));
        }
    }

    let table = report(&config);
    let count = table.row_count();
    if count == 0 {
        ui::success_message(&format!(
            "Content and {} deployment markup are consistent",
            config.site.deployment.name()
        ));
        return Ok(());
    }

    println!("{}", table.build());
    Err(CliError::CheckFailed(count))
}

/// Every content and markup issue as one table
fn report(config: &BriefConfig) -> TableBuilder {
    let mut table = TableBuilder::new();
    table.headers(["Source", "Subject", "Problem"]);

    for issue in validate() {
        table.issue_row("content", &format!("{}[{}]", issue.table, issue.key), &issue.message);
    }

    let (page, _) = mount(config);
    for issue in check_contract(&page, config.site.deployment) {
        table.issue_row("markup", issue.widget.name(), &issue.message);
    }

    table
}
