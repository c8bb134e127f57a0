//! Plain-text rendering of node trees.
//!
//! Produces a line-per-row snapshot of a render description, for logs,
//! debugging and tests. Columns made of two or more rows (and nothing else)
//! are laid out as a grid with cells padded to the widest entry (by display
//! width). A lone row renders inline.

use unicode_width::UnicodeWidthStr;

use crate::node::Node;

const CELL_GAP: &str = "  ";

struct GridRow {
    cells: Vec<String>,
    spanning: bool,
}

/// Render a node tree to lines of text.
pub fn render_lines(node: &Node) -> Vec<String> {
    match node {
        Node::Empty => Vec::new(),
        Node::Column { children, .. } => render_column(children),
        other => vec![inline(other)],
    }
}

/// Render a node tree to a single string, one line per row.
pub fn render_string(node: &Node) -> String {
    render_lines(node).join("\n")
}

fn render_column(children: &[Node]) -> Vec<String> {
    let grid: Option<Vec<GridRow>> = children.iter().map(grid_row).collect();
    match grid {
        Some(rows) if rows.len() > 1 => render_grid(&rows),
        _ => children.iter().flat_map(render_lines).collect(),
    }
}

fn grid_row(node: &Node) -> Option<GridRow> {
    match node {
        Node::Row {
            children, layout, ..
        } => Some(GridRow {
            cells: children.iter().map(inline).collect(),
            spanning: layout.span > 1,
        }),
        Node::Button { child, .. } => grid_row(child),
        _ => None,
    }
}

fn render_grid(rows: &[GridRow]) -> Vec<String> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows.iter().filter(|r| !r.spanning) {
        if widths.len() < row.cells.len() {
            widths.resize(row.cells.len(), 0);
        }
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    let total = widths.iter().sum::<usize>() + CELL_GAP.len() * widths.len().saturating_sub(1);

    rows.iter()
        .map(|row| {
            let line = if row.spanning {
                center(&row.cells.join(" "), total)
            } else {
                row.cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| pad(cell, widths[i]))
                    .collect::<Vec<_>>()
                    .join(CELL_GAP)
            };
            line.trim_end().to_string()
        })
        .collect()
}

fn inline(node: &Node) -> String {
    match node {
        Node::Empty => String::new(),
        Node::Text { content, .. } => content.clone(),
        Node::Input {
            value,
            placeholder,
            mask,
            ..
        } => match mask {
            _ if value.is_empty() => format!("[{}]", placeholder),
            Some(c) => format!("[{}]", std::iter::repeat_n(*c, value.chars().count()).collect::<String>()),
            None => format!("[{}]", value),
        },
        Node::Button { child, .. } => inline(child),
        Node::Row { children, .. } | Node::Column { children, .. } => children
            .iter()
            .map(inline)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    let left = fill / 2;
    format!("{}{}", " ".repeat(left), text)
}
