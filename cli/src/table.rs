use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement,
    Table,
};

/// Consistently styled issue tables for terminal output
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new() -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        Self { table }
    }

    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
            .collect();
        self.table.set_header(cells);
        self
    }

    /// Row whose first cell is colored by severity
    pub fn issue_row(&mut self, source: &str, subject: &str, problem: &str) -> &mut Self {
        self.table.add_row(vec![
            Cell::new(source).fg(Color::Red),
            Cell::new(subject),
            Cell::new(problem),
        ]);
        self
    }

    pub fn row_count(&self) -> usize {
        self.table.row_iter().count()
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_rendered() {
        let mut builder = TableBuilder::new();
        builder
            .headers(["Source", "Subject", "Problem"])
            .issue_row("content", "timeline[1850]", "trigger key has no matching record");
        assert_eq!(builder.row_count(), 1);

        let rendered = builder.build().to_string();
        assert!(rendered.contains("timeline[1850]"));
        assert!(rendered.contains("Problem"));
    }
}
