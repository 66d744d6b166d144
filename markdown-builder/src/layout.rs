//! Table and list layout.
//!
//! Pure functions that turn table cells and list positions into widths,
//! padding, separator segments and markers. The renderer only concatenates
//! what these return.

use crate::types::Alignment;

/// Narrowest separator segment that is still a valid GFM delimiter.
const MIN_SEPARATOR_WIDTH: usize = 3;

/// Indentation added per list nesting level.
const LIST_INDENT: &str = "  ";

/// Display width of a cell: Unicode scalar count, not bytes.
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Width of every column: the widest of the header cell and all row cells.
///
/// Row cells past the header length are ignored.
pub fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|cell| display_width(cell)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }
    widths
}

/// Exactly `count` alignments: truncated, or padded with [`Alignment::Default`].
pub fn normalize_alignments(alignment: &[Alignment], count: usize) -> Vec<Alignment> {
    let mut normalized: Vec<Alignment> = alignment.iter().copied().take(count).collect();
    normalized.resize(count, Alignment::Default);
    normalized
}

/// Separator row segment for a column of `width`.
pub fn separator_segment(alignment: Alignment, width: usize) -> String {
    let width = width.max(MIN_SEPARATOR_WIDTH);
    match alignment {
        Alignment::Default => "-".repeat(width),
        Alignment::Left => format!(":{}", "-".repeat(width - 1)),
        Alignment::Center => format!(":{}:", "-".repeat(width - 2)),
        Alignment::Right => format!("{}:", "-".repeat(width - 1)),
    }
}

/// Pad `value` with spaces to `width` according to `alignment`.
///
/// Center alignment puts the odd space on the right. Values already at or
/// over `width` come back unchanged.
pub fn pad_cell(value: &str, width: usize, alignment: Alignment) -> String {
    let padding = width.saturating_sub(display_width(value));
    if padding == 0 {
        return value.to_string();
    }
    match alignment {
        Alignment::Right => format!("{}{value}", " ".repeat(padding)),
        Alignment::Center => {
            let left = padding / 2;
            let right = padding - left;
            format!("{}{value}{}", " ".repeat(left), " ".repeat(right))
        }
        Alignment::Default | Alignment::Left => format!("{value}{}", " ".repeat(padding)),
    }
}

/// Computed layout of one table, ready to be written row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub widths: Vec<usize>,
    pub alignments: Vec<Alignment>,
}

impl TableLayout {
    pub fn compute(header: &[String], rows: &[Vec<String>], alignment: &[Alignment]) -> Self {
        let widths = column_widths(header, rows);
        let alignments = normalize_alignments(alignment, widths.len());
        Self { widths, alignments }
    }

    /// `| a | b |` with every cell padded to its column width.
    pub fn row(&self, cells: &[String]) -> String {
        let mut line = String::from("|");
        for ((cell, width), alignment) in cells.iter().zip(&self.widths).zip(&self.alignments) {
            line.push(' ');
            line.push_str(&pad_cell(cell, *width, *alignment));
            line.push_str(" |");
        }
        line
    }

    /// `| --- | :-: |` delimiter row.
    pub fn separator(&self) -> String {
        let mut line = String::from("|");
        for (width, alignment) in self.widths.iter().zip(&self.alignments) {
            line.push(' ');
            line.push_str(&separator_segment(*alignment, *width));
            line.push_str(" |");
        }
        line
    }
}

/// Running item counter of one list.
///
/// Ordered lists count up from their start (0 counts as 1); bullet lists
/// always yield `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarkers {
    ordered: bool,
    next: u64,
}

impl ListMarkers {
    pub fn new(ordered: bool, start: u64) -> Self {
        let next = if ordered { start.max(1) } else { 1 };
        Self { ordered, next }
    }
}

impl Iterator for ListMarkers {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.ordered {
            return Some("-".to_string());
        }
        let marker = format!("{}.", self.next);
        self.next = self.next.wrapping_add(1);
        Some(marker)
    }
}

/// Leading whitespace for a list item at `depth`.
pub fn list_indent(depth: usize) -> String {
    LIST_INDENT.repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn width_counts_code_points() {
        assert_eq!(display_width("héllo"), 5);
        assert_eq!(display_width("日本"), 2);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn widths_take_column_maximum() {
        let header = cells(&["Name", "Age"]);
        let rows = vec![cells(&["Alice", "24"]), cells(&["Bo", "100"])];
        assert_eq!(column_widths(&header, &rows), vec![5, 3]);
    }

    #[test]
    fn widths_ignore_extra_row_cells() {
        let header = cells(&["a"]);
        let rows = vec![cells(&["b", "a much longer cell"])];
        assert_eq!(column_widths(&header, &rows), vec![1]);
    }

    #[test]
    fn alignments_padded_and_truncated() {
        assert_eq!(
            normalize_alignments(&[Alignment::Right], 3),
            vec![Alignment::Right, Alignment::Default, Alignment::Default]
        );
        assert_eq!(
            normalize_alignments(&[Alignment::Left, Alignment::Center, Alignment::Right], 2),
            vec![Alignment::Left, Alignment::Center]
        );
    }

    #[test]
    fn separator_segments() {
        assert_eq!(separator_segment(Alignment::Default, 5), "-----");
        assert_eq!(separator_segment(Alignment::Left, 5), ":----");
        assert_eq!(separator_segment(Alignment::Center, 5), ":---:");
        assert_eq!(separator_segment(Alignment::Right, 5), "----:");
    }

    #[test]
    fn separator_has_minimum_width() {
        assert_eq!(separator_segment(Alignment::Default, 1), "---");
        assert_eq!(separator_segment(Alignment::Center, 0), ":-:");
        assert_eq!(separator_segment(Alignment::Right, 2), "--:");
    }

    #[test]
    fn padding_by_alignment() {
        assert_eq!(pad_cell("ab", 5, Alignment::Default), "ab   ");
        assert_eq!(pad_cell("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(pad_cell("ab", 5, Alignment::Right), "   ab");
        assert_eq!(pad_cell("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(pad_cell("ab", 6, Alignment::Center), "  ab  ");
    }

    #[test]
    fn padding_leaves_wide_cells_alone() {
        assert_eq!(pad_cell("abcdef", 3, Alignment::Right), "abcdef");
        assert_eq!(pad_cell("abc", 3, Alignment::Center), "abc");
    }

    #[test]
    fn padding_counts_multibyte_once() {
        assert_eq!(pad_cell("é", 3, Alignment::Left), "é  ");
    }

    #[test]
    fn table_layout_rows() {
        let header = cells(&["Name", "Age"]);
        let rows = vec![cells(&["Alice", "24"])];
        let layout = TableLayout::compute(&header, &rows, &[]);
        assert_eq!(layout.row(&header), "| Name  | Age |");
        assert_eq!(layout.separator(), "| ----- | --- |");
        assert_eq!(layout.row(&rows[0]), "| Alice | 24  |");
    }

    #[test]
    fn ordered_markers_count_from_start() {
        let markers: Vec<String> = ListMarkers::new(true, 3).take(3).collect();
        assert_eq!(markers, vec!["3.", "4.", "5."]);
    }

    #[test]
    fn ordered_markers_treat_zero_as_one() {
        let first = ListMarkers::new(true, 0).next();
        assert_eq!(first.as_deref(), Some("1."));
    }

    #[test]
    fn ordered_markers_wrap_at_max() {
        let markers: Vec<String> = ListMarkers::new(true, u64::MAX).take(2).collect();
        assert_eq!(markers, vec!["18446744073709551615.", "0."]);
    }

    #[test]
    fn bullet_markers_ignore_start() {
        let markers: Vec<String> = ListMarkers::new(false, 7).take(2).collect();
        assert_eq!(markers, vec!["-", "-"]);
    }

    #[test]
    fn indent_is_two_spaces_per_level() {
        assert_eq!(list_indent(0), "");
        assert_eq!(list_indent(2), "    ");
    }
}
