use crate::error::Result;
use brief::content::{ContentSnapshot, Section};

pub fn execute(section: Option<String>) -> Result<()> {
    println!("{}", render(section.as_deref())?);
    Ok(())
}

fn render(section: Option<&str>) -> Result<String> {
    let json = match section {
        Some(name) => name.parse::<Section>()?.to_json()?,
        None => ContentSnapshot::new().to_json()?,
    };
    Ok(json)
}
