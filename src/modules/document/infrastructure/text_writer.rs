use crate::modules::document::domain::{Document, Flowable, Table};
use crate::modules::document::traits::DocumentWriter;
use crate::shared::errors::AppResult;
use std::path::Path;

const RULE_WIDTH: usize = 72;

/// Plain-text rendition of a document, mostly for terminals and tests
#[derive(Debug, Clone, Default)]
pub struct TextWriter;

impl TextWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, document: &Document) -> String {
        let mut out = String::new();
        for flowable in &document.flowables {
            render_flowable(&mut out, flowable);
        }
        out
    }
}

impl DocumentWriter for TextWriter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn write(&self, document: &Document, path: &Path) -> AppResult<()> {
        std::fs::write(path, self.render(document))?;
        log::info!("Text: Wrote {}", path.display());
        Ok(())
    }
}

fn render_flowable(out: &mut String, flowable: &Flowable) {
    match flowable {
        Flowable::Title(value) => {
            out.push_str(&value.to_uppercase());
            out.push('\n');
            out.push_str(&"=".repeat(RULE_WIDTH));
            out.push('\n');
        }
        Flowable::Heading(value) => {
            out.push_str(&format!("== {} ==\n", value));
        }
        Flowable::Subheading(value) => {
            out.push_str(value);
            out.push('\n');
        }
        Flowable::Paragraph(value) => {
            out.push_str(value);
            out.push('\n');
        }
        Flowable::Table(table) => render_table(out, table),
        Flowable::Columns(columns) => {
            for column in columns {
                for inner in column {
                    render_flowable(out, inner);
                }
            }
        }
        Flowable::Spacer(_) => out.push('\n'),
        Flowable::PageBreak => {
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }
    }
}

fn render_table(out: &mut String, table: &Table) {
    if let Some(caption) = &table.caption {
        out.push_str(&format!("[{}]\n", caption));
    }
    let rows = table.normalized_rows();
    let mut widths = vec![0; table.column_count()];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_table_columns() {
        let mut doc = Document::new("NHL Screamsheet");
        doc.push(Flowable::title("NHL Screamsheet"));
        doc.push(Flowable::Table(
            Table::new(
                vec!["Team".to_string(), "PTS".to_string()],
                vec![vec!["Flyers".to_string(), "7".to_string()]],
            )
            .with_caption("Metropolitan"),
        ));

        let text = TextWriter::new().render(&doc);
        assert!(text.starts_with("NHL SCREAMSHEET\n"));
        assert!(text.contains("[Metropolitan]\nTeam    PTS\nFlyers  7\n"));
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        let mut doc = Document::new("Sheet");
        doc.push(Flowable::paragraph("hello"));

        TextWriter::new().write(&doc, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
