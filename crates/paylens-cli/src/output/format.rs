use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;
const MIN_COLUMN_WIDTH: usize = 6;

pub fn terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(120);
    cmp::max(from_env, 40)
}

/// Aligned `label  value` rows under one indent, label column padded to the
/// widest label.
pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Renders rows as an aligned table when the terminal is wide enough,
/// wrapping long cells onto continuation lines. When even the minimum
/// column widths do not fit, falls back to one labeled block per row so
/// nothing is ever truncated.
pub fn render_table_or_blocks(
    columns: &[Column<'_>],
    rows: &[Vec<String>],
    max_width: usize,
    block_label: &str,
) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let Some(widths) = column_widths(columns, rows, max_width) else {
        return render_blocks(columns, rows, block_label);
    };

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();

    let mut output = vec![format_line(columns, &header, &widths)];
    for row in rows {
        let cells = row
            .iter()
            .zip(widths.iter())
            .map(|(value, width)| wrap_cell(value, *width))
            .collect::<Vec<Vec<String>>>();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for line_index in 0..height {
            let line = (0..columns.len())
                .map(|column_index| {
                    cells
                        .get(column_index)
                        .and_then(|chunks| chunks.get(line_index))
                        .cloned()
                        .unwrap_or_default()
                })
                .collect::<Vec<String>>();
            output.push(format_line(columns, &line, &widths));
        }
    }

    output
}

/// Natural widths shrunk to the budget by repeatedly trimming the widest
/// column. `None` when even the floors do not fit.
fn column_widths(
    columns: &[Column<'_>],
    rows: &[Vec<String>],
    max_width: usize,
) -> Option<Vec<usize>> {
    let floors = columns
        .iter()
        .map(|column| cmp::max(column.name.len(), MIN_COLUMN_WIDTH))
        .collect::<Vec<usize>>();
    let budget = max_width
        .saturating_sub(INDENT)
        .saturating_sub(COLUMN_GAP * columns.len().saturating_sub(1));
    if floors.iter().sum::<usize>() > budget {
        return None;
    }

    let mut widths = floors.clone();
    for (index, column) in columns.iter().enumerate() {
        let natural = rows
            .iter()
            .filter_map(|row| row.get(index))
            .map(|value| value.chars().count())
            .chain(std::iter::once(column.name.len()))
            .max()
            .unwrap_or(0);
        widths[index] = cmp::max(widths[index], natural);
    }

    let mut total = widths.iter().sum::<usize>();
    while total > budget {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floors[*index])
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index)?;
        widths[widest] -= 1;
        total -= 1;
    }

    Some(widths)
}

fn format_line(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let pieces = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let width = widths.get(index).copied().unwrap_or(MIN_COLUMN_WIDTH);
            let value = cells.get(index).cloned().unwrap_or_default();
            match column.align {
                Align::Left => format!("{value:<width$}"),
                Align::Right => format!("{value:>width$}"),
            }
        })
        .collect::<Vec<String>>();

    format!("{}{}", " ".repeat(INDENT), pieces.join("  "))
}

fn wrap_cell(value: &str, width: usize) -> Vec<String> {
    if width == 0 || value.chars().count() <= width {
        return vec![value.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in value.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if !current.is_empty() && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word_len <= width {
            current.push_str(word);
        } else {
            lines.extend(hard_split(word, width));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        hard_split(value, width)
    } else {
        lines
    }
}

fn hard_split(token: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for (count, ch) in token.chars().enumerate() {
        current.push(ch);
        if (count + 1) % width == 0 {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn render_blocks(columns: &[Column<'_>], rows: &[Vec<String>], block_label: &str) -> Vec<String> {
    let labels = columns
        .iter()
        .map(|column| format!("{}:", column.name))
        .collect::<Vec<String>>();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut output = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        output.push(format!("  {block_label} {}:", row_index + 1));
        for (column_index, label) in labels.iter().enumerate() {
            let value = row.get(column_index).cloned().unwrap_or_default();
            output.push(format!("    {label:<label_width$}  {value}"));
        }
        if row_index + 1 < rows.len() {
            output.push(String::new());
        }
    }

    output
}
