use crate::ui::width_util::WidthUtil;
use std::io::Write;

const COLUMN_SEP: &str = " | ";

/// Column widths for one table, measured on visible characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub col_widths: Vec<usize>,
    pub total_width: usize,
}

impl TableLayout {
    fn natural_width(col_widths: &[usize]) -> usize {
        match col_widths.len() {
            0 => 0,
            n => col_widths.iter().sum::<usize>() + (n - 1) * COLUMN_SEP.len(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone that indents every line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            util: self.util.clone(),
            left_pad: pad,
        }
    }

    pub fn layout<T: AsRef<str>>(
        &self,
        headers: &[&str],
        rows: &[Vec<T>],
        min_width: Option<usize>,
    ) -> TableLayout {
        let mut col_widths: Vec<usize> =
            headers.iter().map(|h| self.util.visible_width(h)).collect();
        for row in rows {
            for (width, cell) in col_widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(self.util.visible_width(cell.as_ref()));
            }
        }
        let total_width = TableLayout::natural_width(&col_widths).max(min_width.unwrap_or(0));
        TableLayout {
            col_widths,
            total_width,
        }
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        self.layout(headers, rows, None).total_width
    }

    fn line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> std::io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }

    fn rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        self.line(out, &"-".repeat(width.max(1)))
    }

    /// Dashes, the uppercased title, dashes.
    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> std::io::Result<()> {
        let width = width.max(self.util.visible_width(title));
        self.rule(out, width)?;
        self.line(out, &title.to_uppercase())?;
        self.rule(out, width)
    }

    /// With no rows and an `empty_message`, the message replaces the header
    /// and body.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let layout = self.layout(headers, rows, min_width);

        if let (true, Some(msg)) = (rows.is_empty(), empty_message) {
            let width = layout.total_width.max(self.util.visible_width(msg));
            self.render_banner(title, width, out)?;
            self.line(out, msg)?;
            return self.rule(out, width.max(self.util.visible_width(title)));
        }

        self.render_banner(title, layout.total_width, out)?;
        if !headers.is_empty() {
            self.line(out, &self.join_cells(headers, &layout))?;
            self.rule(out, layout.total_width)?;
        }
        for row in rows {
            self.line(out, &self.join_cells(row, &layout))?;
        }
        self.rule(out, layout.total_width)
    }

    /// Cells past the header count are dropped; the last cell is not padded.
    fn join_cells<T: AsRef<str>>(&self, cells: &[T], layout: &TableLayout) -> String {
        let last = layout.col_widths.len().saturating_sub(1);
        cells
            .iter()
            .zip(layout.col_widths.iter())
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == last {
                    cell.as_ref().to_string()
                } else {
                    self.util.pad_visible(cell.as_ref(), *width)
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEP)
    }
}
