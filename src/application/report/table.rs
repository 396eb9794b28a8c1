//! Aligned plain-text table rendering.

use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Padding, Style};

use crate::domain::result_set::ResultSet;

/// Marker printed instead of a table when a query returns nothing.
pub const NO_ROWS: &str = "(no rows)";

/// Write a titled table.
///
/// Layout after the title line: header, separator, one line per row. Cells
/// are left-aligned and padded to the column width; columns are joined by
/// `" | "` and the separator by `"-+-"`. No line carries outer borders.
pub fn render_table<W: Write>(out: &mut W, title: &str, set: &ResultSet) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {title} ===")?;
    if set.is_empty() {
        writeln!(out, "{NO_ROWS}")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(set.headers.clone());
    for row in &set.rows {
        builder.push_record(row.clone());
    }

    let mut table = builder.build();
    table.with(Style::psql());
    if set.headers.len() == 1 {
        table.with(Padding::new(0, 0, 0, 0));
    } else {
        table.modify(Columns::first(), Padding::new(0, 1, 0, 0));
        table.modify(Columns::last(), Padding::new(1, 0, 0, 0));
    }
    writeln!(out, "{table}")
}
