//! Plain-text table rendering for list and detail views.

/// A record that can be laid out as one table row. Column order is fixed per
/// resource and matches the backend's field order.
pub trait Tabular {
    fn columns() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Renders records as an aligned text table, header first. An empty slice
/// renders a placeholder line instead of a bare header.
pub fn render<T: Tabular>(records: &[T]) -> String {
    if records.is_empty() {
        return "(no records)".to_string();
    }

    let columns = T::columns();
    let rows: Vec<Vec<String>> = records.iter().map(Tabular::row).collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, columns.iter().map(|c| c.to_string()), &widths);
    push_line(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)),
        &widths,
    );
    for row in rows {
        push_line(&mut out, row.into_iter(), &widths);
    }
    out
}

fn push_line<I: Iterator<Item = String>>(out: &mut String, cells: I, widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.zip(widths) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&cell);
        for _ in cell.chars().count()..*width {
            line.push(' ');
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
