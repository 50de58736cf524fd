use serde::{Deserialize, Serialize};

/// A captioned grid of text cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub caption: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Relative column widths, one per column
    pub column_weights: Vec<usize>,
}

impl Table {
    /// The header fixes the column count; without one the longest row does
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns = if header.is_empty() {
            rows.iter().map(Vec::len).max().unwrap_or(0)
        } else {
            header.len()
        };
        Self {
            caption: None,
            header,
            rows,
            column_weights: vec![1; columns],
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Widths must cover every column; a mismatched list is ignored
    pub fn with_weights(mut self, weights: Vec<usize>) -> Self {
        if weights.len() == self.column_count() {
            self.column_weights = weights;
        }
        self
    }

    pub fn column_count(&self) -> usize {
        self.column_weights.len()
    }

    /// Every row padded or cut to the column count
    pub fn normalized_rows(&self) -> Vec<Vec<String>> {
        let columns = self.column_count();
        let pad = |row: &Vec<String>| {
            let mut row: Vec<String> = row.iter().take(columns).cloned().collect();
            row.resize(columns, String::new());
            row
        };
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        if !self.header.is_empty() {
            rows.push(pad(&self.header));
        }
        rows.extend(self.rows.iter().map(pad));
        rows
    }
}

/// Layout element of a screamsheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Flowable {
    /// Document title, large and centered
    Title(String),
    /// Section heading, centered
    Heading(String),
    /// Bold line above a block of text
    Subheading(String),
    Paragraph(String),
    Table(Table),
    /// Side-by-side columns of equal width
    Columns(Vec<Vec<Flowable>>),
    /// Vertical gap in points
    Spacer(f32),
    PageBreak,
}

impl Flowable {
    pub fn title(text: impl Into<String>) -> Self {
        Flowable::Title(text.into())
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Flowable::Heading(text.into())
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Flowable::Subheading(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Flowable::Paragraph(text.into())
    }

    /// Visit this element and everything nested in it, depth first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Flowable)) {
        visit(self);
        if let Flowable::Columns(columns) = self {
            for flowable in columns.iter().flatten() {
                flowable.walk(visit);
            }
        }
    }
}

/// Everything that goes into one output file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub flowables: Vec<Flowable>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            flowables: Vec::new(),
        }
    }

    pub fn push(&mut self, flowable: Flowable) {
        self.flowables.push(flowable);
    }

    pub fn extend(&mut self, flowables: impl IntoIterator<Item = Flowable>) {
        self.flowables.extend(flowables);
    }

    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Flowable)) {
        for flowable in &self.flowables {
            flowable.walk(visit);
        }
    }

    /// All tables, including those inside columns
    pub fn tables(&self) -> Vec<&Table> {
        let mut tables = Vec::new();
        self.walk(&mut |f| {
            if let Flowable::Table(table) = f {
                tables.push(table);
            }
        });
        tables
    }

    /// Plain text of every title, heading and paragraph, in order
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |f| match f {
            Flowable::Title(t) | Flowable::Heading(t) | Flowable::Subheading(t) | Flowable::Paragraph(t) => {
                texts.push(t.as_str())
            }
            _ => {}
        });
        texts
    }
}
