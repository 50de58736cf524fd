use crate::modules::document::domain::style::{
    BODY_SIZE, CAPTION_SIZE, HEADING_SIZE, PAGE_MARGIN_MM, SUBHEADING_SIZE, TABLE_SIZE, TITLE_SIZE,
};
use crate::modules::document::domain::{Document, Flowable, Table};
use crate::modules::document::traits::DocumentWriter;
use crate::shared::config::Settings;
use crate::shared::errors::{AppError, AppResult};
use genpdf::elements::{Break, FrameCellDecorator, LinearLayout, PageBreak, Paragraph, TableLayout};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Style, StyledString};
use genpdf::{Alignment, Element as _, Margins, PaperSize, SimplePageDecorator};
use std::path::{Path, PathBuf};

/// Points of vertical space per `Break` line at body size
const POINTS_PER_LINE: f32 = 12.0;

/// Renders documents to Letter-sized PDF pages with genpdf.
///
/// Fonts are loaded from `{font_dir}/{family}-Regular.ttf` (plus `-Bold`,
/// `-Italic` and `-BoldItalic`) on every write.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    font_dir: PathBuf,
    font_family: String,
}

impl PdfWriter {
    pub fn new(font_dir: impl Into<PathBuf>, font_family: impl Into<String>) -> Self {
        Self {
            font_dir: font_dir.into(),
            font_family: font_family.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.font_dir.clone(), settings.font_family.clone())
    }

    fn load_fonts(&self) -> AppResult<FontFamily<FontData>> {
        genpdf::fonts::from_files(&self.font_dir, &self.font_family, None).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to load font family '{}' from {}: {}",
                self.font_family,
                self.font_dir.display(),
                e
            ))
        })
    }

    fn build(&self, document: &Document) -> AppResult<genpdf::Document> {
        let mut pdf = genpdf::Document::new(self.load_fonts()?);
        pdf.set_title(document.title.clone());
        pdf.set_paper_size(PaperSize::Letter);
        pdf.set_font_size(BODY_SIZE);
        pdf.set_line_spacing(1.2);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::all(PAGE_MARGIN_MM));
        pdf.set_page_decorator(decorator);

        let mut body = LinearLayout::vertical();
        for flowable in &document.flowables {
            append(&mut body, flowable)?;
        }
        pdf.push(body);
        Ok(pdf)
    }
}

impl DocumentWriter for PdfWriter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn write(&self, document: &Document, path: &Path) -> AppResult<()> {
        let pdf = self.build(document)?;
        pdf.render_to_file(path)?;
        log::info!("PDF: Wrote {}", path.display());
        Ok(())
    }
}

fn text(value: &str, style: Style) -> Paragraph {
    Paragraph::new(StyledString::new(value.to_string(), style))
}

fn append(layout: &mut LinearLayout, flowable: &Flowable) -> AppResult<()> {
    match flowable {
        Flowable::Title(value) => layout.push(
            text(value, Style::new().bold().with_font_size(TITLE_SIZE)).aligned(Alignment::Center),
        ),
        Flowable::Heading(value) => layout.push(
            text(value, Style::new().bold().with_font_size(HEADING_SIZE))
                .aligned(Alignment::Center),
        ),
        Flowable::Subheading(value) => {
            layout.push(text(value, Style::new().bold().with_font_size(SUBHEADING_SIZE)))
        }
        Flowable::Paragraph(value) => {
            for line in value.split('\n') {
                if line.trim().is_empty() {
                    layout.push(Break::new(0.5));
                } else {
                    layout.push(text(line, Style::new().with_font_size(BODY_SIZE)));
                }
            }
        }
        Flowable::Table(table) => append_table(layout, table)?,
        Flowable::Columns(columns) => append_columns(layout, columns)?,
        Flowable::Spacer(points) => layout.push(Break::new(points / POINTS_PER_LINE)),
        Flowable::PageBreak => layout.push(PageBreak::new()),
    }
    Ok(())
}

fn append_table(layout: &mut LinearLayout, table: &Table) -> AppResult<()> {
    if let Some(caption) = &table.caption {
        layout.push(text(caption, Style::new().bold().with_font_size(CAPTION_SIZE)));
    }
    let rows = table.normalized_rows();
    if rows.is_empty() || table.column_count() == 0 {
        return Ok(());
    }

    let mut grid = TableLayout::new(table.column_weights.clone());
    grid.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    let has_header = !table.header.is_empty();

    for (i, row) in rows.iter().enumerate() {
        let mut style = Style::new().with_font_size(TABLE_SIZE);
        if has_header && i == 0 {
            style = style.bold();
        }
        let mut cells = grid.row();
        for cell in row {
            cells = cells.element(text(cell, style).padded(Margins::all(0.5)));
        }
        cells.push()?;
    }

    layout.push(grid);
    Ok(())
}

fn append_columns(layout: &mut LinearLayout, columns: &[Vec<Flowable>]) -> AppResult<()> {
    if columns.is_empty() {
        return Ok(());
    }

    let mut grid = TableLayout::new(vec![1; columns.len()]);
    let mut row = grid.row();
    for column in columns {
        let mut inner = LinearLayout::vertical();
        for flowable in column {
            append(&mut inner, flowable)?;
        }
        row = row.element(inner.padded(Margins::trbl(0.0, 2.0, 0.0, 2.0)));
    }
    row.push()?;

    layout.push(grid);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fonts_are_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = PdfWriter::new(dir.path(), "NoSuchFont");
        let result = writer.write(&Document::new("Empty"), &dir.path().join("out.pdf"));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
        assert!(!dir.path().join("out.pdf").exists());
    }
}
