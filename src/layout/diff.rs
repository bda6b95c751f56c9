// Diff layout - positional line diff
//
// Lines are paired strictly by index: line i of `before` against line i of
// `after`. There is no LCS alignment, so an insertion near the top marks every
// following line as changed.

/// One index-aligned pair of lines; `None` when that side ran out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub before: Option<String>,
    pub after: Option<String>,
}

impl DiffRow {
    pub fn unchanged(&self) -> bool {
        self.before == self.after
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    #[default]
    Unified,
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    Context,
    Removed,
    Added,
}

impl DiffLineKind {
    pub fn gutter(self) -> char {
        match self {
            DiffLineKind::Context => ' ',
            DiffLineKind::Removed => '-',
            DiffLineKind::Added => '+',
        }
    }
}

/// One line of unified output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    pub text: String,
}

impl std::fmt::Display for DiffLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.gutter(), self.text)
    }
}

/// One side of a split row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitCell {
    pub gutter: char,
    pub text: String,
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRow {
    pub left: SplitCell,
    pub right: SplitCell,
}

fn to_lines(content: &str) -> Vec<String> {
    content.replace("\r\n", "\n").split('\n').map(String::from).collect()
}

/// Pair both texts line by line up to the longer length
pub fn diff_rows(before: &str, after: &str) -> Vec<DiffRow> {
    let before = to_lines(before);
    let after = to_lines(after);
    let max = before.len().max(after.len());

    (0..max)
        .map(|i| DiffRow {
            before: before.get(i).cloned(),
            after: after.get(i).cloned(),
        })
        .collect()
}

/// Unified view: context once, changes as `-` then `+`, missing sides omitted
pub fn unified(rows: &[DiffRow]) -> Vec<DiffLine> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        if row.unchanged() {
            out.push(DiffLine {
                kind: DiffLineKind::Context,
                text: row.before.clone().unwrap_or_default(),
            });
            continue;
        }
        if let Some(before) = &row.before {
            out.push(DiffLine {
                kind: DiffLineKind::Removed,
                text: before.clone(),
            });
        }
        if let Some(after) = &row.after {
            out.push(DiffLine {
                kind: DiffLineKind::Added,
                text: after.clone(),
            });
        }
    }
    out
}

/// Split view: every row side by side, blank text for a missing side
pub fn split(rows: &[DiffRow]) -> Vec<SplitRow> {
    rows.iter()
        .map(|row| {
            let changed = !row.unchanged();
            let cell = |gutter: char, text: &Option<String>| SplitCell {
                gutter: if changed { gutter } else { ' ' },
                text: text.clone().unwrap_or_default(),
                changed,
            };
            SplitRow {
                left: cell('-', &row.before),
                right: cell('+', &row.after),
            }
        })
        .collect()
}

/// Render either mode to plain text. Split columns are padded to the widest
/// left cell and divided by `│`.
pub fn render_diff(before: &str, after: &str, mode: DiffMode) -> Vec<String> {
    let rows = diff_rows(before, after);
    match mode {
        DiffMode::Unified => unified(&rows).iter().map(ToString::to_string).collect(),
        DiffMode::Split => {
            let rows = split(&rows);
            let width = rows
                .iter()
                .map(|r| unicode_width::UnicodeWidthStr::width(r.left.text.as_str()))
                .max()
                .unwrap_or(0);
            rows.iter()
                .map(|r| {
                    format!(
                        "{} {} │ {} {}",
                        r.left.gutter,
                        super::table::pad_cell(&r.left.text, width, super::table::Align::Left),
                        r.right.gutter,
                        r.right.text
                    )
                    .trim_end()
                    .to_string()
                })
                .collect()
        }
    }
}
