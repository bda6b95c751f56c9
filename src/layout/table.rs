// Table layout - box-drawn tables for monospace output
//
// Column widths come from the header and every cell in that column, measured
// in terminal display columns (so CJK and emoji line up). Rendering emits:
//
//   ┌───────┬─────────┐
//   │ Name  │ Version │
//   ├───────┼─────────┤
//   │ react │ 19.2.4  │
//   └───────┴─────────┘

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

// Box-drawing glyphs
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const T_DOWN: char = '┬';
const T_UP: char = '┴';
const T_RIGHT: char = '├';
const T_LEFT: char = '┤';
const CROSS: char = '┼';

/// What a rendered table line represents, so callers can style it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLineKind {
    Border,
    Header,
    /// Data row, with its index into the input rows
    Row(usize),
}

/// One rendered line of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLine {
    pub kind: TableLineKind,
    pub text: String,
}

/// Tabular data plus layout options
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Per-column alignment; missing entries default to left
    pub align: Vec<Align>,
    /// Cap on any column's width; longer text is truncated
    pub max_column_width: Option<usize>,
}

impl Table {
    pub fn new<H, S>(headers: H) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Append a row. Values are coerced to text via `ToString`.
    pub fn row<R, S>(mut self, cells: R) -> Self
    where
        R: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows
            .push(cells.into_iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn align(mut self, align: impl IntoIterator<Item = Align>) -> Self {
        self.align = align.into_iter().collect();
        self
    }

    pub fn max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = Some(width);
        self
    }

    /// Column widths after applying the optional cap
    pub fn widths(&self) -> Vec<usize> {
        let widths = column_widths(&self.headers, &self.rows);
        match self.max_column_width {
            Some(cap) => widths.into_iter().map(|w| w.min(cap)).collect(),
            None => widths,
        }
    }

    /// Render every line, tagged with what it represents.
    ///
    /// A table without headers renders nothing.
    pub fn render_lines(&self) -> Vec<TableLine> {
        if self.headers.is_empty() {
            return Vec::new();
        }

        let widths = self.widths();
        let aligns: Vec<Align> = (0..widths.len())
            .map(|i| self.align.get(i).copied().unwrap_or_default())
            .collect();

        let mut out = Vec::with_capacity(self.rows.len() + 4);
        out.push(TableLine {
            kind: TableLineKind::Border,
            text: horizontal_line(&widths, TOP_LEFT, T_DOWN, TOP_RIGHT),
        });
        out.push(TableLine {
            kind: TableLineKind::Header,
            text: row_line(&self.headers, &widths, &aligns),
        });
        out.push(TableLine {
            kind: TableLineKind::Border,
            text: horizontal_line(&widths, T_RIGHT, CROSS, T_LEFT),
        });
        for (i, row) in self.rows.iter().enumerate() {
            out.push(TableLine {
                kind: TableLineKind::Row(i),
                text: row_line(row, &widths, &aligns),
            });
        }
        out.push(TableLine {
            kind: TableLineKind::Border,
            text: horizontal_line(&widths, BOTTOM_LEFT, T_UP, BOTTOM_RIGHT),
        });
        out
    }

    /// Render to plain text lines
    pub fn render(&self) -> Vec<String> {
        self.render_lines().into_iter().map(|l| l.text).collect()
    }
}

/// Width of each column: the widest of its header and its cells.
///
/// Only header columns count; surplus cells in a row are ignored and missing
/// cells count as empty.
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, width) in widths.iter_mut().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Pad (or truncate) `text` to exactly `width` display columns
pub fn pad_cell(text: &str, width: usize, align: Align) -> String {
    let len = text.width();
    if len >= width {
        return truncate_to_width(text, width);
    }

    let gap = width - len;
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(gap)),
        Align::Right => format!("{}{}", " ".repeat(gap), text),
        Align::Center => {
            let left = gap / 2;
            let right = gap - left;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
        }
    }
}

/// Cut `text` to at most `width` display columns, padding with a space when a
/// wide character would straddle the boundary.
fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn horizontal_line(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| HORIZONTAL.to_string().repeat(w + 2))
        .collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn row_line(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .zip(aligns)
        .enumerate()
        .map(|(i, (&w, &align))| {
            let text = cells.get(i).map(String::as_str).unwrap_or("");
            format!(" {} ", pad_cell(text, w, align))
        })
        .collect();
    format!("{}{}{}", VERTICAL, padded.join(&VERTICAL.to_string()), VERTICAL)
}
