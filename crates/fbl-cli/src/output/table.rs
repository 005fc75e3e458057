//! Plain-text tables for the terminal.
//!
//! Columns are declared up front. Only columns marked `wide` give up width
//! when the terminal is too narrow; the rest keep their natural width.

/// Minimum width a wide column is shrunk to.
const MIN_WIDE: usize = 12;

const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Terminal width to shrink columns into.
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Terminal emphasis for a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Plain,
    Positive,
    Negative,
    Muted,
}

impl Tone {
    const fn ansi(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Positive => Some("32"),
            Self::Negative => Some("31"),
            Self::Muted => Some("33"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    /// Free text that may be truncated to fit the terminal.
    pub wide: bool,
    /// Ids and counts.
    pub align_right: bool,
}

impl Column {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            wide: false,
            align_right: false,
        }
    }

    #[must_use]
    pub const fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.align_right = true;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridCell {
    pub text: String,
    pub tone: Tone,
}

impl GridCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Render `rows` under `columns`. Missing cells render as `-`.
#[must_use]
pub fn render_grid(columns: &[Column], rows: &[Vec<GridCell>], options: TableOptions) -> String {
    let widths = column_widths(columns, rows, options.max_width);

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| pad(&clip(&column.label, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(widths.iter().sum::<usize>() + gaps(columns.len()));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = columns
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(index, (column, width))| {
                let cell = row.get(index);
                let text = cell.map_or("-", |cell| cell.text.as_str());
                let padded = pad(&clip(text, *width), *width, column.align_right);
                let tone = cell.map_or(Tone::Plain, |cell| cell.tone);
                paint(padded, tone, options.color)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn gaps(columns: usize) -> usize {
    columns.saturating_sub(1) * SEPARATOR.len()
}

fn column_widths(
    columns: &[Column],
    rows: &[Vec<GridCell>],
    max_width: Option<usize>,
) -> Vec<usize> {
    let mut widths = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.text.chars().count())
                .fold(column.label.chars().count(), usize::max)
        })
        .collect::<Vec<_>>();

    let Some(max_width) = max_width else {
        return widths;
    };
    let total = widths.iter().sum::<usize>() + gaps(columns.len());
    if total <= max_width {
        return widths;
    }

    let wide = columns
        .iter()
        .enumerate()
        .filter(|(_, column)| column.wide)
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    if wide.is_empty() {
        return widths;
    }

    let fixed = widths
        .iter()
        .enumerate()
        .filter(|(index, _)| !wide.contains(index))
        .map(|(_, width)| *width)
        .sum::<usize>();
    let budget = max_width.saturating_sub(fixed + gaps(columns.len()));
    let share = budget / wide.len();
    for index in wide {
        let floor = columns[index].label.chars().count().max(MIN_WIDE);
        widths[index] = widths[index].min(share.max(floor));
    }
    widths
}

/// Cut `text` to `width` characters, ending in `…` when cut.
fn clip(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        None => text.to_string(),
        Some(_) if width == 0 => String::new(),
        Some(_) => {
            let end = text
                .char_indices()
                .nth(width - 1)
                .map_or(text.len(), |(offset, _)| offset);
            format!("{}…", &text[..end])
        }
    }
}

fn pad(text: &str, width: usize, align_right: bool) -> String {
    if align_right {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn paint(text: String, tone: Tone, color: bool) -> String {
    match tone.ansi() {
        Some(code) if color => format!("\u{1b}[{code}m{text}\u{1b}[0m"),
        _ => text,
    }
}
