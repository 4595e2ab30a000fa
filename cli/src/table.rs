// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a table over rows of `T`.
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// A plain-text table, padded by display width so wide characters line up.
#[derive(Debug)]
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'static str,
    header: bool,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
            header: true,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let headers: Vec<Cow<'_, str>> = self.columns.iter().map(|col| col.name()).collect();
        let widths = column_widths(self.header.then_some(&headers), &rows, self.columns.len());

        if self.header {
            let cells = headers.iter().map(|h| h.bold().to_string());
            self.write_row(f, cells, &headers, &widths)?;
        }

        for (row, data) in rows.iter().zip(self.data) {
            let cells = row.iter().zip(self.columns).map(|(cell, col)| match col.color(data) {
                Some(color) => cell.color(color).to_string(),
                None => cell.to_string(),
            });
            self.write_row(f, cells, row, &widths)?;
        }
        Ok(())
    }
}

impl<T, C: TableColumn<T>> Table<'_, T, C> {
    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        styled: impl Iterator<Item = String>,
        plain: &[Cow<'_, str>],
        widths: &[usize],
    ) -> fmt::Result {
        let last = self.columns.len().saturating_sub(1);
        for (i, (cell, col)) in styled.zip(self.columns).enumerate() {
            // styled cells carry escape codes, so pad by the width of the plain text
            let pad = widths[i].saturating_sub(plain[i].width());
            match col.padding_direction() {
                PaddingDirection::Right => write!(f, "{}{cell}", " ".repeat(pad))?,
                PaddingDirection::Left if i == last => write!(f, "{cell}")?,
                PaddingDirection::Left => write!(f, "{cell}{}", " ".repeat(pad))?,
            }
            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

fn column_widths<'a>(
    header: Option<&Vec<Cow<'a, str>>>,
    rows: &[Vec<Cow<'a, str>>],
    n: usize,
) -> Vec<usize> {
    let mut widths = vec![0; n];
    for row in header.into_iter().chain(rows) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}
