//! Two-column label/value tables.
//!
//! The label column has a fixed width so every table on the page lines up;
//! the content cell takes the rest and wraps whatever it's given, plain text
//! or rich-text nodes. Which borders show is decided by the theme: the first
//! row never carries the row divider.

use crate::model::{ColumnDef, ColumnWidth, Node};
use crate::style::Style;
use crate::theme::{StyleSheet, TABLE_LABEL_WIDTH};

/// Build one row: a label cell and a content cell.
pub fn table_row(label: &str, content: Vec<Node>, is_first_row: bool, styles: &StyleSheet) -> Node {
    let row_style = if is_first_row {
        styles.table_row_first.clone()
    } else {
        styles.table_row.clone()
    };
    Node::table_row(
        row_style,
        vec![
            Node::table_cell(
                styles.table_label_cell.clone(),
                vec![Node::text(label, Style::default())],
            ),
            Node::table_cell(styles.table_content_cell.clone(), content),
        ],
    )
}

/// Build a whole table from `(label, content)` pairs, in order.
pub fn label_table(rows: Vec<(&str, Vec<Node>)>, styles: &StyleSheet) -> Node {
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, (label, content))| table_row(label, content, i == 0, styles))
        .collect();
    Node::table(
        vec![
            ColumnDef {
                width: ColumnWidth::Fixed(TABLE_LABEL_WIDTH),
            },
            ColumnDef {
                width: ColumnWidth::Auto,
            },
        ],
        styles.table.clone(),
        rows,
    )
}
